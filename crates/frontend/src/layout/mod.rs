pub mod global_context;
pub mod left;
pub mod top_header;

use crate::system::auth::context::provide_session;
use leptos::prelude::*;
use top_header::TopHeader;

/// Authenticated shell around every page except login, password recovery
/// and 404.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// +------------------------------------------+
/// ```
///
/// The session is read from local storage here, once per mount. There is no
/// redirect when nothing is stored; the header falls back to a generic user.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    provide_session();

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <left::Left>
                    <left::Sidebar />
                </left::Left>
                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
