//! Reusable HTML fragments.

use super::escape_html;
use crate::i18n::Translator;
use crate::notification::Notification;

/// Page title block.
#[must_use]
pub fn page_header(title: &str, intro: &str) -> String {
    format!(
        r#"<header class="page-header">
            <h1>{}</h1>
            <p class="lead">{}</p>
        </header>"#,
        escape_html(title),
        escape_html(intro)
    )
}

/// Image card with a title, body and optional footer line.
#[must_use]
pub fn card(image: &str, title: &str, body: &str, meta: Option<&str>) -> String {
    let meta = meta
        .map(|m| format!(r#"<p class="card__meta">{}</p>"#, escape_html(m)))
        .unwrap_or_default();
    format!(
        r#"<article class="card">
            <img src="{image}" alt="{alt}" loading="lazy">
            <div class="card__body">
                <h3>{title}</h3>
                {meta}
                <p>{body}</p>
            </div>
        </article>"#,
        image = escape_html(image),
        alt = escape_html(title),
        title = escape_html(title),
        body = escape_html(body),
    )
}

/// One notification toast.
#[must_use]
pub fn toast(notification: &Notification) -> String {
    format!(
        r#"<div class="toast {class}" role="status">
            <strong>{title}</strong>
            <p>{description}</p>
        </div>"#,
        class = notification.variant.css_class(),
        title = escape_html(&notification.title),
        description = escape_html(&notification.description),
    )
}

/// Floating museum-guide chat widget.
///
/// The browser script reads its strings from the `data-*` attributes so the
/// widget follows the page language without a second lookup.
#[must_use]
pub fn guide_widget(t: &Translator) -> String {
    format!(
        r#"<aside class="guide" data-guide data-language="{lang}" data-thinking="{thinking}" data-error-title="{error_title}" data-error="{error}">
        <button type="button" class="guide__toggle" data-guide-toggle aria-expanded="false" aria-label="{open}">&#128172;</button>
        <section class="guide__panel" data-guide-panel hidden>
            <header class="guide__header">
                <h2>{title}</h2>
                <button type="button" class="icon-button" data-guide-toggle aria-label="{close}">&times;</button>
            </header>
            <ol class="guide__log" data-guide-log aria-live="polite">
                <li class="guide__message guide__message--model">{welcome}</li>
            </ol>
            <form class="guide__form" data-guide-form>
                <textarea name="message" rows="2" placeholder="{placeholder}" required></textarea>
                <button type="submit">{send}</button>
            </form>
        </section>
    </aside>"#,
        lang = t.language().code(),
        thinking = escape_html(t.t("ai.thinking")),
        error_title = escape_html(t.t("notify.error")),
        error = escape_html(t.t("ai.error")),
        open = escape_html(t.t("ai.open")),
        title = escape_html(t.t("ai.title")),
        close = escape_html(t.t("common.close")),
        welcome = escape_html(t.t("ai.welcome")),
        placeholder = escape_html(t.t("ai.placeholder")),
        send = escape_html(t.t("ai.send")),
    )
}
