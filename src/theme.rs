use web_sys::{HtmlElement, Storage};

const DARK: &str = "dark";
const LIGHT: &str = "light";
const THEME_KEY: &str = "mboxview-theme";

fn body() -> Option<HtmlElement> {
    web_sys::window()?.document()?.body()
}

fn storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn stored_theme() -> Option<String> {
    storage()?.get_item(THEME_KEY).ok()?
}

fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .map(|query| query.matches())
        == Some(true)
}

/// Theme from the media query, overridden by a stored choice.
pub fn init_theme() {
    let theme = match stored_theme().as_deref() {
        Some(DARK) => DARK,
        Some(LIGHT) => LIGHT,
        _ => {
            if prefers_dark() {
                DARK
            } else {
                LIGHT
            }
        }
    };

    if let Some(body) = body() {
        let _ = body.class_list().add_1(theme);
    }
}

pub fn toggle_theme() {
    let Some(body) = body() else {
        return;
    };

    let new_theme = if body.class_list().contains(DARK) {
        LIGHT
    } else {
        DARK
    };

    let _ = body.class_list().remove_2(DARK, LIGHT);
    let _ = body.class_list().add_1(new_theme);

    if let Some(storage) = storage() {
        let _ = storage.set_item(THEME_KEY, new_theme);
    }
}
