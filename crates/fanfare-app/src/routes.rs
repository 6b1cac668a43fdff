//! Route table.
//!
//! Both screens share one query shape, `?name=<urlencoded>`.

use std::fmt;

use dioxus::prelude::*;
use dioxus::router::FromQuery;
use fanfare_core::{DisplayName, NameQuery};

use crate::components::{NameEntryScreen, VideoScreen};

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/?:..query")]
    NameEntryScreen { query: NameArg },
    #[route("/video?:..query")]
    VideoScreen { query: NameArg },
}

impl Route {
    /// Name entry with an empty field; the back link on the stage returns here.
    pub fn entry() -> Self {
        Route::NameEntryScreen {
            query: NameArg::default(),
        }
    }

    pub fn video(name: &DisplayName) -> Self {
        Route::VideoScreen {
            query: NameArg::for_name(name),
        }
    }
}

/// Router-facing wrapper around [`NameQuery`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NameArg(NameQuery);

impl NameArg {
    pub fn for_name(name: &DisplayName) -> Self {
        Self(NameQuery::for_name(name))
    }

    pub fn query(&self) -> &NameQuery {
        &self.0
    }
}

impl FromQuery for NameArg {
    fn from_query(query: &str) -> Self {
        Self(NameQuery::parse(query))
    }
}

impl fmt::Display for NameArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
