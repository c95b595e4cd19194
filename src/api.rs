use gloo_net::http::Request;
use serde::Deserialize;
use url::form_urlencoded;

use crate::error::FetchError;
use crate::types::{EmailDetail, EmailList, Filters};

pub fn api_path(path: &str) -> String {
    let mut pathname = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
        .trim_end_matches('/')
        .to_string();

    pathname.push('/');
    pathname.push_str(path);

    pathname
}

/// Query string for the listing endpoint. All six parameters are always
/// present; the server treats an empty value as "no filter".
pub fn list_query(filters: &Filters, page: u32, per_page: u32) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("page", &page.to_string())
        .append_pair("per_page", &per_page.to_string())
        .append_pair("search", &filters.search)
        .append_pair("sender", &filters.sender)
        .append_pair("from_date", &filters.from_date)
        .append_pair("to_date", &filters.to_date)
        .finish()
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Decode a non-2xx listing body. The server reports failures as
/// `{"error": "..."}`, but not every failure carries one.
fn decode_error_body(body: &str) -> FetchError {
    match serde_json_wasm::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            error: Some(message),
        }) => FetchError::Server(message),
        _ => FetchError::Transport("Server error".into()),
    }
}

/// Decode a 2xx listing body, which may still encode a logical failure.
fn decode_list_body(body: &str) -> Result<EmailList, FetchError> {
    if let Ok(ErrorBody {
        error: Some(message),
    }) = serde_json_wasm::from_str::<ErrorBody>(body)
    {
        return Err(FetchError::Application(message));
    }

    serde_json_wasm::from_str(body).map_err(|e| FetchError::Transport(e.to_string()))
}

pub async fn fetch_emails(
    filters: &Filters,
    page: u32,
    per_page: u32,
) -> Result<EmailList, FetchError> {
    let url = format!("{}?{}", api_path("emails"), list_query(filters, page, per_page));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(decode_error_body(&body));
    }

    decode_list_body(&body)
}

/// Fetch one message by id. Failures here are reported without reading the
/// response body; the listing endpoint is the only one with structured
/// error bodies.
pub async fn fetch_email(id: u64) -> Result<EmailDetail, FetchError> {
    let mut url = api_path("email");
    url.push_str("?id=");
    url.push_str(&id.to_string());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Transport(format!(
            "request failed with status {}",
            response.status()
        )));
    }

    response
        .json()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_always_carries_all_parameters() {
        let query = list_query(&Filters::default(), 1, 20);

        assert_eq!(query, "page=1&per_page=20&search=&sender=&from_date=&to_date=");
    }

    #[test]
    fn query_carries_the_requested_page() {
        for page in [1, 2, 7] {
            let query = list_query(&Filters::default(), page, 20);

            assert!(query.starts_with(&format!("page={page}&per_page=20&")));
        }
    }

    #[test]
    fn query_encodes_filter_values() {
        let filters = Filters {
            search: "hello world".into(),
            sender: "bob@example.com".into(),
            from_date: "2024-01-01".into(),
            to_date: "2024-12-31".into(),
        };

        assert_eq!(
            list_query(&filters, 2, 20),
            "page=2&per_page=20&search=hello+world&sender=bob%40example.com\
             &from_date=2024-01-01&to_date=2024-12-31"
        );
    }

    #[test]
    fn error_body_with_message_is_a_server_error() {
        assert_eq!(
            decode_error_body(r#"{"error":"db down"}"#),
            FetchError::Server("db down".into())
        );
    }

    #[test]
    fn banner_text_is_the_server_supplied_message() {
        assert_eq!(decode_error_body(r#"{"error":"db down"}"#).to_string(), "db down");
    }

    #[test]
    fn error_body_without_message_falls_back_to_generic() {
        assert_eq!(
            decode_error_body("<html>nope</html>"),
            FetchError::Transport("Server error".into())
        );
        assert_eq!(decode_error_body("{}"), FetchError::Transport("Server error".into()));
    }

    #[test]
    fn success_body_decodes_a_page_of_emails() {
        let body = r#"{
            "emails": [
                {"id": 0, "subject": "hi", "from": "a@b.example",
                 "date": "2024-01-01 10:00:00", "body": "hello"}
            ],
            "total": 45,
            "page": 1,
            "per_page": 20,
            "total_pages": 3
        }"#;

        let list = decode_list_body(body).unwrap();

        assert_eq!(list.emails.len(), 1);
        assert_eq!(list.emails[0].subject, "hi");
        assert_eq!(list.total, 45);
        assert_eq!(list.total_pages, 3);
    }

    #[test]
    fn success_body_with_error_field_is_an_application_error() {
        match decode_list_body(r#"{"error":"bad filter"}"#) {
            Err(FetchError::Application(message)) => assert_eq!(message, "bad filter"),
            _ => panic!("expected an application error"),
        }
    }

    #[test]
    fn undecodable_success_body_is_a_transport_error() {
        assert!(matches!(decode_list_body("not json"), Err(FetchError::Transport(_))));
    }
}
