use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::QuestionnaireView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", QuestionnaireView)] Home {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "masthead",
                h1 { "PawMatch" }
                p { class: "masthead__tagline",
                    "Find the breeds that fit how you actually live."
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
