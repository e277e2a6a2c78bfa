//! Server-rendered HTML shell shared by every page.
//!
//! Pages render their body into a `String`; [`html_shell`] wraps it with the
//! header (navigation, language menu, theme toggle), footer, notification
//! area and the museum-guide widget.

pub mod components;

use crate::i18n::{Language, Translator};
use crate::notification::Notification;
use crate::preferences::Preferences;

/// Escape text for use in HTML element content and quoted attributes.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// A navigation entry: path and translation key.
#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub path: &'static str,
    pub label_key: &'static str,
}

/// Everything the shell needs besides the page body.
#[derive(Debug, Clone, Copy)]
pub struct ShellContext<'a> {
    pub prefs: &'a Preferences,
    pub nav: &'a [NavLink],
    /// Path of the page being rendered, for the active nav state.
    pub active_path: &'a str,
    pub notification: Option<&'a Notification>,
}

/// Wrap `content` in the full document.
#[must_use]
pub fn html_shell(ctx: &ShellContext<'_>, title: &str, content: &str) -> String {
    let t = ctx.prefs.translator();
    let language = ctx.prefs.language;
    let site_name = escape_html(t.t("home.hero.title"));
    let title = escape_html(title);
    let header = header(ctx, &t);
    let footer = footer(&t);
    let toasts = ctx
        .notification
        .map(components::toast)
        .unwrap_or_default();
    let guide = components::guide_widget(&t);

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}" dir="{dir}" data-theme="{theme}">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="{description}">
    <title>{title} - {site_name}</title>
    <link rel="stylesheet" href="/static/app.css">
    <script defer src="/static/guide.js"></script>
</head>
<body>
    {header}
    <main id="app" class="container">
        {content}
    </main>
    {footer}
    <div class="toasts" data-toasts aria-live="polite">{toasts}</div>
    {guide}
</body>
</html>"#,
        lang = language.code(),
        dir = language.dir(),
        theme = ctx.prefs.theme.name(),
        description = escape_html(t.t("home.hero.subtitle")),
    )
}

fn header(ctx: &ShellContext<'_>, t: &Translator) -> String {
    let links: String = ctx
        .nav
        .iter()
        .map(|link| {
            let current = if link.path == ctx.active_path {
                r#" aria-current="page""#
            } else {
                ""
            };
            format!(
                r#"<a href="{}"{current}>{}</a>"#,
                link.path,
                escape_html(t.t(link.label_key))
            )
        })
        .collect();

    let languages: String = Language::ALL
        .iter()
        .map(|lang| {
            let selected = if *lang == t.language() {
                r#" aria-current="true""#
            } else {
                ""
            };
            format!(
                r#"<li><a href="/lang/{code}" hreflang="{code}" lang="{code}"{selected}>{name}</a></li>"#,
                code = lang.code(),
                name = lang.native_name(),
            )
        })
        .collect();

    format!(
        r#"<header class="site-header">
        <div class="container site-header__inner">
            <a href="/" class="site-header__brand">{brand}</a>
            <nav class="site-nav">{links}</nav>
            <div class="site-header__actions">
                <details class="language-menu">
                    <summary aria-label="{language_label}">{current}</summary>
                    <ul>{languages}</ul>
                </details>
                <form method="post" action="/theme">
                    <button type="submit" class="icon-button" aria-label="{theme_label}" title="{theme_label}">{theme_icon}</button>
                </form>
            </div>
        </div>
    </header>"#,
        brand = escape_html(t.t("home.hero.title")),
        language_label = escape_html(t.t("language.label")),
        current = t.language().native_name(),
        theme_label = escape_html(t.t("theme.toggle")),
        theme_icon = match ctx.prefs.theme {
            crate::preferences::Theme::Light => "&#9790;",
            crate::preferences::Theme::Dark => "&#9728;",
        },
    )
}

fn footer(t: &Translator) -> String {
    format!(
        r#"<footer class="site-footer">
        <div class="container site-footer__grid">
            <section>
                <h3>{about}</h3>
                <p>{mission}</p>
            </section>
            <section>
                <h3>{explore}</h3>
                <ul>
                    <li><a href="/prehistoric">{prehistoric}</a></li>
                    <li><a href="/ethnographic">{ethnographic}</a></li>
                    <li><a href="/exhibitions">{exhibitions}</a></li>
                    <li><a href="/blog">{blog}</a></li>
                </ul>
            </section>
            <section>
                <h3>{visit}</h3>
                <ul>
                    <li>{address}</li>
                    <li>{schedule}</li>
                    <li><a href="tel:+21321741149">+213 21 74 11 49</a></li>
                    <li><a href="mailto:contact@musee-bardo.dz">contact@musee-bardo.dz</a></li>
                </ul>
            </section>
            <section>
                <h3>{follow}</h3>
                <ul class="social">
                    <li><a href="https://facebook.com" rel="noopener noreferrer" target="_blank">Facebook</a></li>
                    <li><a href="https://instagram.com" rel="noopener noreferrer" target="_blank">Instagram</a></li>
                    <li><a href="https://twitter.com" rel="noopener noreferrer" target="_blank">Twitter</a></li>
                </ul>
            </section>
        </div>
        <p class="site-footer__copyright">{copyright}</p>
    </footer>"#,
        about = escape_html(t.t("footer.about")),
        mission = escape_html(t.t("home.mission.text")),
        explore = escape_html(t.t("home.quickLinks.title")),
        prehistoric = escape_html(t.t("nav.prehistoric")),
        ethnographic = escape_html(t.t("nav.ethnographic")),
        exhibitions = escape_html(t.t("nav.exhibitions")),
        blog = escape_html(t.t("nav.blog")),
        visit = escape_html(t.t("footer.visit")),
        address = escape_html(t.t("home.hours.address")),
        schedule = escape_html(t.t("home.hours.schedule")),
        follow = escape_html(t.t("footer.follow")),
        copyright = escape_html(t.t("footer.copyright")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::Notification;
    use crate::preferences::Theme;

    const NAV: &[NavLink] = &[
        NavLink { path: "/", label_key: "nav.home" },
        NavLink { path: "/about", label_key: "nav.about" },
    ];

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">O'Neil & co</a>"#),
            "&lt;a href=&quot;x&quot;&gt;O&#39;Neil &amp; co&lt;/a&gt;"
        );
    }

    #[test]
    fn test_shell_sets_direction_and_theme() {
        let prefs = Preferences {
            language: Language::Ar,
            theme: Theme::Dark,
        };
        let ctx = ShellContext {
            prefs: &prefs,
            nav: NAV,
            active_path: "/about",
            notification: None,
        };
        let html = html_shell(&ctx, "t", "<p>body</p>");
        assert!(html.contains(r#"<html lang="ar" dir="rtl" data-theme="dark">"#));
        assert!(html.contains(r#"<a href="/about" aria-current="page">"#));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn test_shell_renders_notification() {
        let prefs = Preferences::default();
        let toast = Notification::failure("Error", "<b>nope</b>");
        let ctx = ShellContext {
            prefs: &prefs,
            nav: NAV,
            active_path: "/",
            notification: Some(&toast),
        };
        let html = html_shell(&ctx, "t", "");
        assert!(html.contains("toast--destructive"));
        assert!(html.contains("&lt;b&gt;nope&lt;/b&gt;"));
    }
}
