use std::collections::BTreeMap;
use std::fmt;

use reqwest::Url;

use crate::constants::LOCATION_BASE;
use crate::error::{AdminError, AdminResult};
use crate::models::EntityKind;
use crate::session::Session;
use crate::table::page_from_query;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Root,
    Login,
    Users,
    Teams,
    Projects,
    Dashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Root => "/",
            Route::Login => "/login",
            Route::Users => "/usuarios",
            Route::Teams => "/equipes",
            Route::Projects => "/projetos",
            Route::Dashboard => "/dashboard",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Route::Root),
            "/login" => Some(Route::Login),
            "/usuarios" => Some(Route::Users),
            "/equipes" => Some(Route::Teams),
            "/projetos" => Some(Route::Projects),
            "/dashboard" => Some(Route::Dashboard),
            _ => None,
        }
    }

    /// The entity whose table this route renders.
    pub fn entity(&self) -> Option<EntityKind> {
        match self {
            Route::Users => Some(EntityKind::User),
            Route::Teams => Some(EntityKind::Team),
            Route::Projects => Some(EntityKind::Project),
            _ => None,
        }
    }

    pub fn for_entity(kind: EntityKind) -> Route {
        match kind {
            EntityKind::User => Route::Users,
            EntityKind::Team => Route::Teams,
            EntityKind::Project => Route::Projects,
        }
    }
}

/// A route plus its query string, e.g. `/projetos?page=2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub route: Route,
    pub query: BTreeMap<String, String>,
}

impl Location {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            query: BTreeMap::new(),
        }
    }

    pub fn with_query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.insert(key.to_string(), value.into());
        self
    }

    pub fn table_page(kind: EntityKind, page: u32) -> Self {
        Self::new(Route::for_entity(kind)).with_query("page", page.to_string())
    }

    pub fn parse(input: &str) -> AdminResult<Self> {
        let input = input.trim();
        let relative = if input.starts_with('/') {
            input.to_string()
        } else {
            format!("/{}", input)
        };

        let url = Url::parse(&format!("{}{}", LOCATION_BASE, relative))
            .map_err(|e| AdminError::ParseError(format!("Invalid location '{}': {}", input, e)))?;

        let route = Route::from_path(url.path())
            .ok_or_else(|| AdminError::InvalidInput(format!("Unknown route: {}", url.path())))?;

        let query = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        Ok(Self { route, query })
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    /// Page requested by the `page` parameter, 1 when absent or invalid.
    pub fn page(&self) -> u32 {
        page_from_query(self.query_value("page"))
    }

    /// Where this location actually leads for `session`: the root goes to
    /// the login page, and every page but the login page requires a session.
    pub fn resolve(self, session: &Session) -> Location {
        match self.route {
            Route::Root => Location::new(Route::Login),
            Route::Login => self,
            _ if !session.is_authenticated() => Location::new(Route::Login),
            _ => self,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route.path())?;
        if !self.query.is_empty() {
            let mut serializer = Url::parse(LOCATION_BASE).map_err(|_| fmt::Error)?;
            serializer.query_pairs_mut().extend_pairs(self.query.iter());
            write!(f, "?{}", serializer.query().unwrap_or_default())?;
        }
        Ok(())
    }
}
