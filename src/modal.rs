use web_sys::MouseEvent;
use yew::{function_component, html, Callback, Html, Properties};

use crate::types::EmailDetail;

#[derive(Properties, PartialEq)]
pub struct EmailModalProps {
    pub detail: EmailDetail,
    pub on_close: Callback<MouseEvent>,
}

/// Full message content over the list. The body is a text node; email
/// content is never interpreted as markup here.
#[function_component(EmailModal)]
pub fn email_modal(props: &EmailModalProps) -> Html {
    html! {
      <div id="emailModal" class="modal" onclick={props.on_close.clone()}>
        <div class="modal-dialog" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
          <div class="modal-header">
            <h5 id="emailModalTitle" class="modal-title">{&props.detail.subject}</h5>
            <button class="modal-close" onclick={props.on_close.clone()}>{"\u{00d7}"}</button>
          </div>
          <div id="emailModalBody" class="modal-body">
            <pre>{&props.detail.body}</pre>
          </div>
        </div>
      </div>
    }
}
