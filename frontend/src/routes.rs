use common::filter::Filter;
use common::url_param::FilterArg;
use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::pages::announcement_page::AnnouncementPage;
use crate::pages::filter_page::FilterPage;
use crate::pages::home_page::HomePage;
use crate::pages::search_page::SearchPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    // a malformed filter segment decodes to the empty filter, see FilterArg
    #[route("/search/:filter")]
    SearchPage { filter: FilterArg },


    #[route("/filter/:filter")]
    FilterPage { filter: FilterArg },


    #[route("/announcement/:post_id")]
    AnnouncementPage { post_id: u64 },

}

impl Route {
    pub fn search_page_from_filter(filter: Filter) -> Self {
        Self::SearchPage { filter: filter.into() }
    }

    pub fn filter_page_from_filter(filter: Filter) -> Self {
        Self::FilterPage { filter: filter.into() }
    }
}
