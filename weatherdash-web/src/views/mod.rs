//! Server-rendered HTML.

pub mod chart;
pub mod dashboard;
pub mod icons;
pub mod location;

use maud::{DOCTYPE, Markup, PreEscaped, html};

const STYLESHEET: &str = r#"
*{box-sizing:border-box}
body{margin:0;min-height:100vh;background:#020617;color:#f1f5f9;font-family:system-ui,-apple-system,"Segoe UI",sans-serif}
button{font:inherit;cursor:pointer}
.icon{width:1.25rem;height:1.25rem;flex-shrink:0}
.muted{color:#94a3b8}
.gate{display:flex;flex-direction:column;align-items:center;justify-content:center;min-height:100vh;text-align:center}
.gate .brand-icon{width:6rem;height:6rem;color:#60a5fa}
.gate h1{font-size:2.25rem;margin:1rem 0 .5rem;background:linear-gradient(to right,#60a5fa,#67e8f9);-webkit-background-clip:text;background-clip:text;color:transparent}
.btn-primary{margin-top:1rem;background:#2563eb;color:#fff;font-weight:700;border:0;border-radius:9999px;padding:.75rem 2rem}
.btn-primary:hover{background:#3b82f6}
nav{position:sticky;top:0;z-index:50;border-bottom:1px solid rgba(30,41,59,.6);background:rgba(15,23,42,.5);backdrop-filter:blur(12px)}
nav .inner{max-width:80rem;margin:0 auto;padding:0 1.5rem;height:4rem;display:flex;align-items:center;justify-content:space-between}
nav .brand{display:flex;align-items:center;gap:.5rem;font-weight:700;font-size:1.125rem}
nav .brand .icon{color:#60a5fa;width:1.5rem;height:1.5rem}
nav .user{display:flex;align-items:center;gap:1rem;font-size:.875rem}
.btn-icon{background:none;border:0;padding:.5rem;border-radius:9999px;color:#94a3b8}
.btn-icon:hover{background:#1e293b;color:#fff}
main{max-width:80rem;margin:0 auto;padding:2rem 1.5rem;display:grid;gap:2rem}
.overview{display:grid;gap:1.5rem;grid-template-columns:repeat(auto-fit,minmax(20rem,1fr))}
.card{border:1px solid rgba(51,65,85,.5);border-radius:1.5rem;padding:2rem;background:rgba(15,23,42,.4)}
.current{position:relative;overflow:hidden;background:linear-gradient(135deg,rgba(30,58,138,.4),rgba(15,23,42,.4))}
.current .backdrop{position:absolute;top:-4rem;right:-4rem;width:16rem;height:16rem;opacity:.1}
.current .place{display:flex;align-items:center;gap:.5rem;color:#93c5fd;font-size:.875rem;text-transform:uppercase;letter-spacing:.05em}
.current .temp{font-size:6rem;font-weight:300;margin-top:2rem}
.current .temp .unit{font-size:2.25rem;color:#60a5fa}
.current .meta{display:flex;align-items:center;gap:.75rem;margin-top:1rem}
.pill{padding:.25rem .75rem;border-radius:9999px;background:rgba(59,130,246,.2);color:#bfdbfe;font-size:.875rem;border:1px solid rgba(59,130,246,.2)}
.wind{display:flex;align-items:center;gap:.25rem;font-size:.875rem;color:#94a3b8}
.days{display:grid;gap:1rem;grid-template-columns:repeat(auto-fit,minmax(10rem,1fr))}
.day{padding:1.5rem;border-radius:1rem;border:1px solid rgba(30,41,59,.5);background:rgba(15,23,42,.3);display:flex;flex-direction:column;justify-content:space-between}
.day.today{background:rgba(30,41,59,.5);border-color:rgba(59,130,246,.3)}
.day header{display:flex;justify-content:space-between;font-size:.875rem;color:#94a3b8}
.day.today header{color:#60a5fa}
.day .range{display:flex;justify-content:space-between;align-items:flex-end;margin-top:1rem}
.day .max{font-size:1.5rem;font-weight:300}
.day .min{font-size:1.25rem;font-weight:300;color:#94a3b8;text-align:right}
.day small{display:block;font-size:.875rem;color:#64748b}
.chart-card h3{font-size:1.125rem;font-weight:500;color:#cbd5e1;margin:0 0 1.5rem}
.chart{width:100%;height:300px}
.chart text{fill:#94a3b8;font-size:12px}
.chart .point circle{fill:#60a5fa;opacity:0}
.chart .point:hover circle{opacity:1}
.chart .point rect{fill:transparent}
.debug{border-top:1px solid rgba(30,41,59,.5);padding-top:2rem;margin-top:1rem}
.debug summary{cursor:pointer;color:#64748b;font-size:.875rem}
.debug .badge{border:1px solid #334155;padding:.125rem .5rem;border-radius:.25rem;font-family:monospace;background:#0f172a;margin-left:.5rem}
.debug .block{background:#0f172a;padding:1rem;border-radius:.5rem;border:1px solid #1e293b;margin-top:1rem}
.debug h4{font-size:.75rem;color:#94a3b8;text-transform:uppercase;letter-spacing:.05em;margin:0 0 .5rem}
.debug pre{font-size:10px;font-family:monospace;white-space:pre-wrap;word-break:break-all;max-height:10rem;overflow:auto;margin:0}
.debug .token{color:#34d399}
.debug .payload{color:#93c5fd}
#location-status{position:fixed;bottom:1rem;right:1rem;z-index:50;display:flex;align-items:center;gap:.75rem;padding:.75rem;background:#0f172a;border:1px solid #334155;border-radius:.5rem;font-size:.75rem;color:#cbd5e1}
#location-status .dot{padding:.5rem;border-radius:9999px;background:#1e293b;color:#94a3b8}
#location-status.locating .dot{background:rgba(59,130,246,.2);color:#60a5fa;animation:pulse 2s infinite}
@keyframes pulse{50%{opacity:.5}}
"#;

/// HTML document shell shared by every page.
pub fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(STYLESHEET)) }
            }
            body { (body) }
        }
    }
}

/// Shown instead of the dashboard when no session is present.
pub fn sign_in_page() -> Markup {
    page(
        "Weather Dash",
        html! {
            div.gate {
                (icons::cloud_sun("brand-icon"))
                h1 { "Weather Dash" }
                p.muted { "Please sign in to access the dashboard" }
                form method="post" action="/auth/signin" {
                    button.btn-primary type="submit" { "Sign In with SSO" }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_page_posts_to_signin() {
        let html = sign_in_page().into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Please sign in to access the dashboard"));
        assert!(html.contains(r#"action="/auth/signin""#));
    }
}
