use yew::{function_component, html, Callback, Html, Properties};

use crate::types::EmailSummary;

const EXCERPT_CHARS: usize = 100;

/// Clip a message body for the card preview. Char-based, so multi-byte
/// content never splits a code point.
pub fn excerpt(body: &str) -> String {
    let mut clipped: String = body.chars().take(EXCERPT_CHARS).collect();
    clipped.push_str("...");
    clipped
}

#[derive(Properties, PartialEq)]
pub struct EmailCardsProps {
    pub emails: Vec<EmailSummary>,
    pub on_select: Callback<u64>,
}

/// One card per listing record; a single informational placeholder when the
/// page has no results. Subject, sender, date and excerpt are all rendered
/// as text nodes, so markup in email content stays inert.
#[function_component(EmailCards)]
pub fn email_cards(props: &EmailCardsProps) -> Html {
    if props.emails.is_empty() {
        return html! {
          <div class="alert alert-info">{"No emails found matching your criteria."}</div>
        };
    }

    props
        .emails
        .iter()
        .map(|email| {
            let id = email.id;
            let on_select = props.on_select.clone();
            let onclick = Callback::from(move |_| on_select.emit(id));

            html! {
              <div class="card email-card" {onclick}>
                <h5 class="card-title">{&email.subject}</h5>
                <div class="card-subtitle">
                  {"From: "}{&email.from}{" | Date: "}{&email.date}
                </div>
                <div class="email-snippet">{excerpt(&email.body)}</div>
              </div>
            }
        })
        .collect()
}
