use gloo_console::error;
use wasm_bindgen_futures::spawn_local;
use yew::{html, Callback, Component, Context, Html};

use crate::{
    api::{fetch_email, fetch_emails},
    error::FetchError,
    filters::FilterBar,
    list::EmailCards,
    modal::EmailModal,
    pagination::Pagination,
    state::{Pager, RequestSeq},
    theme::{init_theme, toggle_theme},
    types::{EmailDetail, EmailList, EmailSummary, Filters},
};

pub enum Msg {
    PageChange(u32),
    EditFilters(Filters),
    ApplyFilters,
    Loaded { seq: u32, list: EmailList },
    LoadFailed { seq: u32, error: FetchError },
    Select(u64),
    DetailLoaded(Box<EmailDetail>),
    DetailFailed(FetchError),
    CloseDetail,
}

pub struct Overview {
    pager: Pager,
    filters: Filters,
    emails: Vec<EmailSummary>,
    // pagination metadata as reported by the last successful listing response
    total: u64,
    page: u32,
    per_page: u32,
    loading: bool,
    error: Option<FetchError>,
    selected: Option<u64>,
    detail: Option<EmailDetail>,
    requests: RequestSeq,
}

impl Overview {
    /// Issue a listing request for the current page and filter draft. The
    /// sequence tag lets `update` drop completions a later reload has
    /// superseded.
    fn reload(&mut self, ctx: &Context<Self>) {
        let seq = self.requests.next();
        self.loading = true;
        self.error = None;
        self.emails.clear();

        let filters = self.filters.clone();
        let page = self.pager.current_page;
        let per_page = self.pager.per_page;
        let link = ctx.link().clone();

        spawn_local(async move {
            match fetch_emails(&filters, page, per_page).await {
                Ok(list) => link.send_message(Msg::Loaded { seq, list }),
                Err(error) => link.send_message(Msg::LoadFailed { seq, error }),
            }
        });
    }
}

impl Component for Overview {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let pager = Pager::default();
        let mut overview = Self {
            filters: Filters::default(),
            emails: Vec::new(),
            total: 0,
            page: pager.current_page,
            per_page: pager.per_page,
            pager,
            loading: false,
            error: None,
            selected: None,
            detail: None,
            requests: RequestSeq::default(),
        };

        spawn_local(async {
            init_theme();
        });

        overview.reload(ctx);
        overview
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::PageChange(page) => {
                if !self.pager.request_page_change(page) {
                    return false;
                }

                self.reload(ctx);
                scroll_to_top();
            }
            Msg::EditFilters(filters) => {
                self.filters = filters;
                return false;
            }
            Msg::ApplyFilters => {
                self.pager.back_to_first();
                self.reload(ctx);
            }
            Msg::Loaded { seq, list } => {
                if !self.requests.is_current(seq) {
                    return false;
                }

                self.loading = false;
                self.pager.update_from(&list);
                self.total = list.total;
                self.page = list.page;
                self.per_page = list.per_page;
                self.emails = list.emails;
            }
            Msg::LoadFailed { seq, error } => {
                if !self.requests.is_current(seq) {
                    return false;
                }

                self.loading = false;
                self.error = Some(error);
            }
            Msg::Select(id) => {
                self.selected = Some(id);
                let link = ctx.link().clone();

                spawn_local(async move {
                    match fetch_email(id).await {
                        Ok(detail) => link.send_message(Msg::DetailLoaded(Box::new(detail))),
                        Err(error) => link.send_message(Msg::DetailFailed(error)),
                    }
                });

                return false;
            }
            Msg::DetailLoaded(detail) => {
                // only the most recently clicked card may open the modal
                if self.selected != Some(detail.id) {
                    return false;
                }

                self.detail = Some(*detail);
            }
            Msg::DetailFailed(error) => {
                error!(format!("Error fetching email: {error}"));
                self.error = Some(error);
            }
            Msg::CloseDetail => {
                self.selected = None;
                self.detail = None;
            }
        };

        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
          <>
            <header>
              <h1>{"Mbox"}<span>{"View"}</span></h1>
              <button class="dark-mode" title="Toggle dark mode" onclick={Callback::from(|_| {
                  toggle_theme();
              })} />
            </header>
            <FilterBar
              filters={self.filters.clone()}
              on_change={link.callback(Msg::EditFilters)}
              on_apply={link.callback(|_| Msg::ApplyFilters)}
            />
            if self.loading {
              <div id="loading" class="bouncing-loader">
                <div></div>
                <div></div>
                <div></div>
              </div>
            }
            <div id="emails-container">
              if let Some(error) = &self.error {
                <div class="alert alert-danger">
                  {"Error loading emails: "}{error.to_string()}
                </div>
              } else if !self.loading {
                <EmailCards
                  emails={self.emails.clone()}
                  on_select={link.callback(Msg::Select)}
                />
              }
            </div>
            <ul id="pagination" class="pagination">
              <Pagination
                total={self.total}
                page={self.page}
                per_page={self.per_page}
                on_select={link.callback(Msg::PageChange)}
              />
            </ul>
            if let Some(detail) = &self.detail {
              <EmailModal
                detail={detail.clone()}
                on_close={link.callback(|_| Msg::CloseDetail)}
              />
            }
          </>
        }
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
