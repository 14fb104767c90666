//! View selection and server-side rendering.
//!
//! The home page's three states form a pure function of the identity and
//! the matching user record, not stored state. Markup is intentionally
//! minimal; styling is out of scope for this service.

use model::entities::{link, user};

use crate::identity::Identity;

/// Which of the three home-page states to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeView {
    /// Not signed in: marketing content and sign-in affordances.
    Landing,
    /// Signed in but no profile yet: the claim-username form.
    Claim,
    /// Signed in with a claimed profile: the owner dashboard.
    Dashboard,
}

pub fn select_home_view(identity: Option<&Identity>, user: Option<&user::Model>) -> HomeView {
    match (identity, user) {
        (None, _) => HomeView::Landing,
        (Some(_), None) => HomeView::Claim,
        (Some(_), Some(_)) => HomeView::Dashboard,
    }
}

/// Escape text for interpolation into HTML bodies and attribute values.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

pub fn render_landing() -> String {
    page(
        "Linkverse",
        "<main>\n<h1>Linkverse</h1>\n\
         <p>Your personal link page - share everything with one simple URL.</p>\n\
         <p>Sign in to claim your username.</p>\n</main>",
    )
}

pub fn render_claim() -> String {
    page(
        "Claim your username - Linkverse",
        "<main>\n<h1>Claim your username</h1>\n\
         <form method=\"post\" action=\"/claim\">\n\
         <input type=\"text\" name=\"username\" minlength=\"3\" pattern=\"[A-Za-z0-9_]+\" required>\n\
         <button type=\"submit\">Claim</button>\n\
         </form>\n</main>",
    )
}

pub fn render_dashboard(user: &user::Model, links: &[link::Model]) -> String {
    let mut body = String::new();
    body.push_str("<main>\n");
    body.push_str(&format!(
        "<h1>{}</h1>\n<p>@{}</p>\n",
        escape(user.display_name()),
        escape(&user.username)
    ));

    body.push_str(
        "<form method=\"post\" action=\"/links\">\n\
         <input type=\"text\" name=\"title\" placeholder=\"Title\" required>\n\
         <input type=\"url\" name=\"url\" placeholder=\"https://\" required>\n\
         <button type=\"submit\">Add link</button>\n\
         </form>\n",
    );

    body.push_str("<ul>\n");
    for link_row in links {
        body.push_str(&format!(
            "<li>{} - {}\n\
             <form method=\"post\" action=\"/links/delete\">\n\
             <input type=\"hidden\" name=\"link_id\" value=\"{}\">\n\
             <button type=\"submit\">Delete</button>\n\
             </form>\n</li>\n",
            escape(&link_row.title),
            escape(&link_row.url),
            link_row.id
        ));
    }
    body.push_str("</ul>\n</main>");

    page("Dashboard - Linkverse", &body)
}

pub fn render_profile(user: &user::Model, links: &[link::Model]) -> String {
    let mut body = String::new();
    body.push_str("<main>\n");
    body.push_str(&format!(
        "<h1>{}</h1>\n<p>@{}</p>\n",
        escape(user.display_name()),
        escape(&user.username)
    ));

    if links.is_empty() {
        body.push_str("<p>No links yet.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for link_row in links {
            body.push_str(&format!(
                "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></li>\n",
                escape(&link_row.url),
                escape(&link_row.title)
            ));
        }
        body.push_str("</ul>\n");
    }
    body.push_str("<p><a href=\"/\">Create your own - Linkverse</a></p>\n</main>");

    page(&format!("@{} - Linkverse", user.username), &body)
}

pub fn render_not_found() -> String {
    page(
        "Not found - Linkverse",
        "<main>\n<h1>404</h1>\n\
         <p>This page doesn't exist or the username hasn't been claimed yet.</p>\n\
         <p><a href=\"/\">Go home</a></p>\n</main>",
    )
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn sample_identity() -> Identity {
        Identity {
            subject: "idp|sample".to_string(),
            email: None,
            given_name: None,
            family_name: None,
        }
    }

    fn sample_user() -> user::Model {
        user::Model {
            id: 1,
            identity_ref: "idp|sample".to_string(),
            email: String::new(),
            username: "sample".to_string(),
            name: Some("Sam Ple".to_string()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_home_view_selection() {
        let identity = sample_identity();
        let user = sample_user();

        assert_eq!(select_home_view(None, None), HomeView::Landing);
        assert_eq!(select_home_view(None, Some(&user)), HomeView::Landing);
        assert_eq!(select_home_view(Some(&identity), None), HomeView::Claim);
        assert_eq!(
            select_home_view(Some(&identity), Some(&user)),
            HomeView::Dashboard
        );
    }

    #[test]
    fn test_escape_covers_markup_characters() {
        assert_eq!(
            escape("<a href=\"x\">&'</a>"),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_profile_escapes_link_fields() {
        let user = sample_user();
        let links = vec![link::Model {
            id: 7,
            title: "<script>alert(1)</script>".to_string(),
            url: "https://x.io/?a=1&b=2".to_string(),
            owner_id: 1,
            created_at: Utc::now(),
        }];

        let html = render_profile(&user, &links);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("https://x.io/?a=1&amp;b=2"));
    }

    #[test]
    fn test_profile_without_links_renders_empty_state() {
        let html = render_profile(&sample_user(), &[]);
        assert!(html.contains("No links yet."));
    }
}
