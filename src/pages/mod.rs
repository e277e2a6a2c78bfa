//! Page shell: route table and page renderers.
//!
//! Every page is a pure function of the visitor's [`Preferences`] (plus the
//! contact form state on `/contact`), rendered with a single [`Translator`]
//! so a language switch changes every string on the page at once.

pub mod content;

use axum::{
    Form, Router,
    extract::{Path, State},
    http::HeaderMap,
    response::{Html, IntoResponse, Redirect},
    routing::{MethodRouter, get, post},
};
use axum_extra::extract::cookie::CookieJar;

use crate::AppState;
use crate::contact::{ContactForm, outcome_notification};
use crate::i18n::{Language, Translator};
use crate::notification::Notification;
use crate::preferences::{self, LANGUAGE_COOKIE, Preferences, THEME_COOKIE};
use crate::ui::components::{card, page_header};
use crate::ui::{NavLink, ShellContext, escape_html, html_shell};
use content::ExhibitionStatus;

/// Routable pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Blog,
    Prehistoric,
    Ethnographic,
    Exhibitions,
    Contact,
}

impl Page {
    /// Every page, in navigation order.
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::About,
        Page::Blog,
        Page::Prehistoric,
        Page::Ethnographic,
        Page::Exhibitions,
        Page::Contact,
    ];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Blog => "/blog",
            Self::Prehistoric => "/prehistoric",
            Self::Ethnographic => "/ethnographic",
            Self::Exhibitions => "/exhibitions",
            Self::Contact => "/contact",
        }
    }

    /// Translation key of the navigation label.
    #[must_use]
    pub const fn nav_key(self) -> &'static str {
        match self {
            Self::Home => "nav.home",
            Self::About => "nav.about",
            Self::Blog => "nav.blog",
            Self::Prehistoric => "nav.prehistoric",
            Self::Ethnographic => "nav.ethnographic",
            Self::Exhibitions => "nav.exhibitions",
            Self::Contact => "nav.contact",
        }
    }

    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.path() == path)
    }
}

const NAV: [NavLink; 7] = {
    let mut links = [NavLink {
        path: "/",
        label_key: "nav.home",
    }; 7];
    let mut i = 0;
    while i < Page::ALL.len() {
        links[i] = NavLink {
            path: Page::ALL[i].path(),
            label_key: Page::ALL[i].nav_key(),
        };
        i += 1;
    }
    links
};

/// Render `page` as a full HTML document.
#[must_use]
pub fn render_page(page: Page, prefs: &Preferences, notification: Option<&Notification>) -> String {
    render_with_form(page, prefs, notification, &ContactForm::default())
}

fn render_with_form(
    page: Page,
    prefs: &Preferences,
    notification: Option<&Notification>,
    form: &ContactForm,
) -> String {
    let t = prefs.translator();
    let (title, body) = match page {
        Page::Home => (t.t("nav.home"), home(&t)),
        Page::About => (t.t("about.title"), about(&t)),
        Page::Blog => (t.t("blog.title"), blog(&t)),
        Page::Prehistoric => (
            t.t("prehistoric.title"),
            collections(&t, "prehistoric", content::PREHISTORIC),
        ),
        Page::Ethnographic => (
            t.t("ethnographic.title"),
            collections(&t, "ethnographic", content::ETHNOGRAPHIC),
        ),
        Page::Exhibitions => (t.t("exhibitions.title"), exhibitions(&t)),
        Page::Contact => (t.t("contact.title"), contact(&t, form)),
    };
    let ctx = ShellContext {
        prefs,
        nav: &NAV,
        active_path: page.path(),
        notification,
    };
    html_shell(&ctx, title, &body)
}

fn home(t: &Translator) -> String {
    let quick_links: String = content::QUICK_LINKS
        .iter()
        .map(|(path, title_key, desc_key, image)| {
            format!(
                r#"<a class="card-link" href="{path}">{}</a>"#,
                card(image, t.t(title_key), t.t(desc_key), None)
            )
        })
        .collect();

    format!(
        r#"<section class="hero">
            <div class="hero__text">
                <h1>{title}</h1>
                <p class="lead">{subtitle}</p>
                <p class="hero__actions">
                    <a class="button" href="/prehistoric">{cta}</a>
                    <a class="button button--outline" href="/about">{about}</a>
                    <a class="button button--outline" href="/contact">{contact}</a>
                </p>
            </div>
            <img class="hero__image" src="{hero}" alt="{title}">
        </section>
        <section class="mission">
            <h2>{mission_title}</h2>
            <p>{mission}</p>
        </section>
        <section>
            <h2>{quick_title}</h2>
            <div class="grid">{quick_links}</div>
        </section>
        <section class="visit">
            <h2>{hours_title}</h2>
            <ul>
                <li>{schedule}</li>
                <li>{address}</li>
                <li><a href="tel:+21321741149">+213 21 74 11 49</a></li>
                <li><a href="mailto:contact@musee-bardo.dz">contact@musee-bardo.dz</a></li>
            </ul>
        </section>"#,
        title = escape_html(t.t("home.hero.title")),
        subtitle = escape_html(t.t("home.hero.subtitle")),
        cta = escape_html(t.t("home.hero.cta")),
        about = escape_html(t.t("nav.about")),
        contact = escape_html(t.t("nav.contact")),
        hero = content::HERO_IMAGE,
        mission_title = escape_html(t.t("home.mission.title")),
        mission = escape_html(t.t("home.mission.text")),
        quick_title = escape_html(t.t("home.quickLinks.title")),
        hours_title = escape_html(t.t("home.hours.title")),
        schedule = escape_html(t.t("home.hours.schedule")),
        address = escape_html(t.t("home.hours.address")),
    )
}

fn about(t: &Translator) -> String {
    let sections: String = ["history", "mission", "collections"]
        .iter()
        .map(|section| {
            format!(
                "<section><h2>{}</h2><p>{}</p></section>",
                escape_html(t.t(&format!("about.{section}.title"))),
                escape_html(t.t(&format!("about.{section}.text")))
            )
        })
        .collect();
    format!(
        "{}{sections}",
        page_header(t.t("about.title"), t.t("home.mission.text"))
    )
}

fn blog(t: &Translator) -> String {
    let language = t.language();
    let articles: String = content::ARTICLES
        .iter()
        .map(|article| {
            format!(
                r#"<article class="article" id="article-{id}">
                    <img src="{image}" alt="{title}" loading="lazy">
                    <div>
                        <span class="badge">{category}</span>
                        <h2>{title}</h2>
                        <p class="article__meta">{by} {author} &middot; <time datetime="{iso}">{date}</time></p>
                        <p class="lead">{excerpt}</p>
                        <details>
                            <summary>{read_more}</summary>
                            <p>{body}</p>
                        </details>
                    </div>
                </article>"#,
                id = article.id,
                image = article.image,
                title = escape_html(article.title.get(language)),
                category = escape_html(article.category),
                by = escape_html(t.t("blog.by")),
                author = escape_html(article.author),
                iso = article.date,
                date = escape_html(&content::format_date(article.date, language)),
                excerpt = escape_html(article.excerpt.get(language)),
                read_more = escape_html(t.t("blog.readMore")),
                body = escape_html(article.body.get(language)),
            )
        })
        .collect();
    format!(
        "{}<div class=\"articles\">{articles}</div>",
        page_header(t.t("blog.title"), t.t("blog.subtitle"))
    )
}

fn collections(t: &Translator, page_key: &str, sections: &[content::CollectionSection]) -> String {
    let language = t.language();
    let body: String = sections
        .iter()
        .map(|section| {
            let cards: String = section
                .artifacts
                .iter()
                .map(|a| card(a.image, a.name.get(language), a.description.get(language), None))
                .collect();
            format!(
                r#"<section class="collection" id="{id}">
                    <h2>{title}</h2>
                    <p>{description}</p>
                    <div class="grid">{cards}</div>
                </section>"#,
                id = section.id,
                title = escape_html(t.t(section.title_key)),
                description = escape_html(t.t(section.description_key)),
            )
        })
        .collect();
    format!(
        "{}{body}",
        page_header(
            t.t(&format!("{page_key}.title")),
            t.t(&format!("{page_key}.intro"))
        )
    )
}

fn exhibitions(t: &Translator) -> String {
    let language = t.language();
    let groups: String = [
        ExhibitionStatus::Current,
        ExhibitionStatus::Upcoming,
        ExhibitionStatus::Past,
    ]
    .into_iter()
    .map(|status| {
        let cards: String = content::exhibitions_with_status(status)
            .map(|e| {
                let meta = format!(
                    "{} – {} · {}: {} · {}: {}",
                    content::format_date(e.start_date, language),
                    content::format_date(e.end_date, language),
                    t.t("exhibitions.curator"),
                    e.curator,
                    t.t("exhibitions.location"),
                    e.location,
                );
                card(e.image, e.title.get(language), e.description.get(language), Some(&meta))
            })
            .collect();
        format!(
            r#"<section class="exhibitions exhibitions--{name}"><h2>{heading}</h2><div class="grid">{cards}</div></section>"#,
            name = status.name(),
            heading = escape_html(t.t(status.heading_key())),
        )
    })
    .collect();
    format!(
        "{}{groups}",
        page_header(t.t("exhibitions.title"), t.t("exhibitions.intro"))
    )
}

fn contact(t: &Translator, form: &ContactForm) -> String {
    let field = |name: &str, key: &str, kind: &str, value: &str| {
        format!(
            r#"<label for="{name}">{label}</label>
               <input id="{name}" name="{name}" type="{kind}" value="{value}" required>"#,
            label = escape_html(t.t(key)),
            value = escape_html(value),
        )
    };

    format!(
        r#"{header}
        <div class="contact">
            <form class="contact__form" method="post" action="/contact">
                <h2>{form_title}</h2>
                <p>{form_description}</p>
                {name}
                {email}
                {subject}
                <label for="message">{message_label}</label>
                <textarea id="message" name="message" rows="6" required>{message}</textarea>
                <button type="submit">{submit}</button>
            </form>
            <aside class="contact__info">
                <h2>{info_title}</h2>
                <dl>
                    <dt>{address_label}</dt><dd>{address}</dd>
                    <dt>{phone_label}</dt><dd><a href="tel:+21321741149">+213 21 74 11 49</a></dd>
                    <dt>{email_label}</dt><dd><a href="mailto:contact@musee-bardo.dz">contact@musee-bardo.dz</a></dd>
                    <dt>{hours_label}</dt><dd>{hours}</dd>
                </dl>
            </aside>
        </div>"#,
        header = page_header(t.t("contact.title"), t.t("contact.subtitle")),
        form_title = escape_html(t.t("contact.form.title")),
        form_description = escape_html(t.t("contact.form.description")),
        name = field("name", "contact.form.name", "text", &form.name),
        email = field("email", "contact.form.email", "email", &form.email),
        subject = field("subject", "contact.form.subject", "text", &form.subject),
        message_label = escape_html(t.t("contact.form.message")),
        message = escape_html(&form.message),
        submit = escape_html(t.t("contact.form.submit")),
        info_title = escape_html(t.t("contact.info.title")),
        address_label = escape_html(t.t("contact.info.address")),
        address = escape_html(t.t("home.hours.address")),
        phone_label = escape_html(t.t("contact.info.phone")),
        email_label = escape_html(t.t("contact.info.email")),
        hours_label = escape_html(t.t("contact.info.hours")),
        hours = escape_html(t.t("home.hours.schedule")),
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Static page and preference routes.
///
/// `/contact` is left to the caller, which layers the form POST separately.
pub fn router() -> Router<AppState> {
    Page::ALL
        .into_iter()
        .filter(|page| *page != Page::Contact)
        .fold(Router::new(), |router, page| {
            router.route(page.path(), page_route(page))
        })
        .route("/lang/{code}", get(set_language))
        .route("/theme", post(toggle_theme))
}

fn page_route(page: Page) -> MethodRouter<AppState> {
    get(move |prefs: Preferences| async move { Html(render_page(page, &prefs, None)) })
}

/// GET /contact - Empty contact form.
pub async fn contact_page(prefs: Preferences) -> Html<String> {
    Html(render_page(Page::Contact, &prefs, None))
}

/// POST /contact - Submit the contact form and re-render the page.
///
/// The form keeps its values on failure and is cleared on success.
pub async fn contact_submit(
    State(state): State<AppState>,
    prefs: Preferences,
    Form(form): Form<ContactForm>,
) -> Html<String> {
    let outcome = state.contact.submit(&form).await;
    let toast = outcome_notification(&outcome, prefs.translator());
    let shown = if outcome.is_ok() {
        ContactForm::default()
    } else {
        form
    };
    Html(render_with_form(Page::Contact, &prefs, Some(&toast), &shown))
}

/// GET /lang/{code} - Store the language cookie and go back.
async fn set_language(
    Path(code): Path<String>,
    headers: HeaderMap,
    jar: CookieJar,
) -> impl IntoResponse {
    let back = Redirect::to(&preferences::return_path(&headers));
    match Language::from_code(&code) {
        Some(language) => {
            tracing::debug!(language = %language, "Language preference changed");
            (jar.add(preferences::preference_cookie(LANGUAGE_COOKIE, language.code())), back)
        }
        None => (jar, back),
    }
}

/// POST /theme - Flip between light and dark and go back.
async fn toggle_theme(prefs: Preferences, headers: HeaderMap, jar: CookieJar) -> impl IntoResponse {
    let theme = prefs.theme.toggled();
    (
        jar.add(preferences::preference_cookie(THEME_COOKIE, theme.name())),
        Redirect::to(&preferences::return_path(&headers)),
    )
}

/// Unknown paths go home.
pub async fn fallback() -> Redirect {
    Redirect::to("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::Theme;

    #[test]
    fn test_route_table() {
        assert_eq!(Page::from_path("/exhibitions"), Some(Page::Exhibitions));
        assert_eq!(Page::from_path("/nope"), None);
        assert_eq!(NAV.len(), Page::ALL.len());
        assert_eq!(NAV[6].path, "/contact");
    }

    #[test]
    fn test_every_page_renders_in_every_language() {
        for language in Language::ALL {
            let prefs = Preferences {
                language,
                theme: Theme::Light,
            };
            for page in Page::ALL {
                let html = render_page(page, &prefs, None);
                assert!(html.contains(&format!(r#"lang="{}""#, language.code())));
                assert!(html.contains(&format!(r#"<a href="{}" aria-current="page">"#, page.path())));
            }
        }
    }

    #[test]
    fn test_no_untranslated_keys_leak() {
        // A missing key renders as the key itself; none of ours should.
        for language in Language::ALL {
            let prefs = Preferences {
                language,
                theme: Theme::Light,
            };
            for page in Page::ALL {
                let html = render_page(page, &prefs, None);
                for probe in ["nav.", "home.hero.", "contact.form.", "exhibitions.", "blog.subtitle"] {
                    assert!(!html.contains(&format!(">{probe}")), "{page:?} {language} leaks {probe}");
                }
            }
        }
    }

    #[test]
    fn test_exhibitions_grouped() {
        let html = render_page(Page::Exhibitions, &Preferences::default(), None);
        let current = html.find("Current Exhibition").unwrap();
        let upcoming = html.find("Upcoming Exhibitions").unwrap();
        let past = html.find("Past Exhibitions").unwrap();
        assert!(current < upcoming && upcoming < past);
        assert!(html.contains("Berber Silver"));
    }

    #[test]
    fn test_contact_form_keeps_values() {
        let form = ContactForm {
            name: "Amina".to_string(),
            email: String::new(),
            subject: "Visit".to_string(),
            message: "<hello>".to_string(),
        };
        let html = render_with_form(Page::Contact, &Preferences::default(), None, &form);
        assert!(html.contains(r#"value="Amina""#));
        assert!(html.contains("&lt;hello&gt;</textarea>"));
    }
}
