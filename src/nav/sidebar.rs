use crate::constants::{BRAND_NAME, BRAND_SHORT};
use crate::error::AdminResult;
use crate::session::{Role, Session};

use super::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub route: Route,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterAction {
    Settings,
    Logout,
}

impl FooterAction {
    pub fn label(&self) -> &'static str {
        match self {
            FooterAction::Settings => "Configurações",
            FooterAction::Logout => "Sair",
        }
    }
}

const ADMIN_LINKS: &[NavLink] = &[
    NavLink {
        route: Route::Users,
        label: "Usuários",
    },
    NavLink {
        route: Route::Teams,
        label: "Equipes",
    },
    NavLink {
        route: Route::Projects,
        label: "Projetos",
    },
];

const COLABORADOR_LINKS: &[NavLink] = &[];

pub const FOOTER_ACTIONS: &[FooterAction] = &[FooterAction::Settings, FooterAction::Logout];

/// Navigation links visible to `role`.
pub fn links_for(role: Role) -> &'static [NavLink] {
    match role {
        Role::Admin => ADMIN_LINKS,
        Role::Colaborador => COLABORADOR_LINKS,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sidebar {
    pub role: Role,
    pub links: &'static [NavLink],
}

impl Sidebar {
    /// Sidebar for an authenticated session; anonymous sessions get
    /// `NotAuthenticated` and belong on the login page.
    pub fn for_session(session: &Session) -> AdminResult<Self> {
        let role = session.require()?;
        Ok(Self {
            role,
            links: links_for(role),
        })
    }

    /// Brand line for the given width: the full name, or its initial when narrow.
    pub fn title(&self, compact: bool) -> &'static str {
        if compact {
            BRAND_SHORT
        } else {
            BRAND_NAME
        }
    }

    pub fn footer(&self) -> &'static [FooterAction] {
        FOOTER_ACTIONS
    }

    pub fn position(&self, route: Route) -> Option<usize> {
        self.links.iter().position(|link| link.route == route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdminError;

    #[test]
    fn test_admin_sees_all_tables() {
        let routes: Vec<Route> = links_for(Role::Admin).iter().map(|l| l.route).collect();
        assert_eq!(routes, vec![Route::Users, Route::Teams, Route::Projects]);
    }

    #[test]
    fn test_colaborador_sees_no_links() {
        assert!(links_for(Role::Colaborador).is_empty());
    }

    #[test]
    fn test_anonymous_gets_no_sidebar() {
        assert!(matches!(
            Sidebar::for_session(&Session::Anonymous),
            Err(AdminError::NotAuthenticated)
        ));
    }

    #[test]
    fn test_sidebar_title_and_footer() {
        let sidebar = Sidebar::for_session(&Session::authenticated(Role::Admin, None)).unwrap();
        assert_eq!(sidebar.title(false), "Byte Benders");
        assert_eq!(sidebar.title(true), "B");
        assert_eq!(sidebar.footer().last().map(|a| a.label()), Some("Sair"));
        assert_eq!(sidebar.position(Route::Projects), Some(2));
    }
}
