//! The dashboard HTML page.
//!
//! A single static page: heading, the combined monthly chart, an episode
//! dropdown, the per-episode chart, and two stat cards. Client-side script
//! fetches the JSON endpoints and re-renders via Plotly; a dropdown change
//! refreshes both charts, mirroring the original callback wiring.

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Podcast Analytics Dashboard</title>
<script src="__PLOTLY_CDN__"></script>
<style>
  body { font-family: sans-serif; margin: 0; }
  h1, h2 { text-align: center; }
  .section { margin: 20px; }
  .cards { display: flex; justify-content: space-around; margin: 20px; }
  .card { text-align: center; flex: 1; border: 1px solid #ddd; padding: 20px; margin: 10px; }
  select { width: 100%; }
</style>
</head>
<body>
<h1>Podcast Analytics Dashboard</h1>

<div class="section">
  <h2>Monthly Downloads and New Episodes</h2>
  <div id="monthly-stats-graph"></div>
</div>

<div class="section">
  <label for="episode-dropdown">Select Episode:</label>
  <select id="episode-dropdown"></select>
</div>

<div id="downloads-graph"></div>

<div class="cards">
  <div class="card">
    <h4>Total Downloads</h4>
    <h2 id="total-downloads"></h2>
  </div>
  <div class="card">
    <h4>Latest Download Count</h4>
    <h2 id="latest-downloads"></h2>
  </div>
</div>

<script>
const EPISODE_TITLES = __EPISODE_TITLES__;

const dropdown = document.getElementById("episode-dropdown");
for (const title of EPISODE_TITLES) {
  const option = document.createElement("option");
  option.value = title;
  option.textContent = title;
  dropdown.appendChild(option);
}

async function refreshMonthly() {
  const resp = await fetch("/api/monthly");
  const view = await resp.json();
  Plotly.react("monthly-stats-graph", view.figure.data, view.figure.layout);
}

async function refreshEpisode(title) {
  const resp = await fetch("/api/episode?title=" + encodeURIComponent(title));
  const view = await resp.json();
  Plotly.react("downloads-graph", view.figure.data, view.figure.layout);
  document.getElementById("total-downloads").textContent = view.total_downloads;
  document.getElementById("latest-downloads").textContent = view.latest_downloads;
}

dropdown.addEventListener("change", () => {
  refreshMonthly();
  refreshEpisode(dropdown.value);
});

refreshMonthly();
if (EPISODE_TITLES.length > 0) {
  refreshEpisode(EPISODE_TITLES[0]);
}
</script>
</body>
</html>
"#;

/// Render the index page with the dropdown populated from `titles`.
///
/// Titles are embedded as a JSON array with `<` escaped to `\u003c`, so an
/// episode name containing `</script>` cannot terminate the script element.
pub fn render_index(titles: &[String]) -> String {
    // serde_json escapes quotes but not `<`; a literal `</script>` inside a
    // title would otherwise end the script block early.
    let titles_json = serde_json::to_string(titles)
        .unwrap_or_else(|_| "[]".to_string())
        .replace('<', "\\u003c");

    TEMPLATE
        .replace("__PLOTLY_CDN__", PLOTLY_CDN)
        .replace("__EPISODE_TITLES__", &titles_json)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn titles() -> Vec<String> {
        vec!["Episode One".to_string(), "Episode Two".to_string()]
    }

    #[test]
    fn test_render_index_structure() {
        let html = render_index(&titles());
        assert!(html.contains("<h1>Podcast Analytics Dashboard</h1>"));
        assert!(html.contains("Monthly Downloads and New Episodes"));
        assert!(html.contains("id=\"monthly-stats-graph\""));
        assert!(html.contains("id=\"downloads-graph\""));
        assert!(html.contains("id=\"episode-dropdown\""));
        assert!(html.contains("Total Downloads"));
        assert!(html.contains("Latest Download Count"));
    }

    #[test]
    fn test_render_index_embeds_titles_as_json() {
        let html = render_index(&titles());
        assert!(html.contains(r#"["Episode One","Episode Two"]"#));
    }

    #[test]
    fn test_render_index_escapes_title_quotes() {
        let tricky = vec![r#"The "Quoted" Episode"#.to_string()];
        let html = render_index(&tricky);
        // JSON escaping keeps the quote inside the string literal.
        assert!(html.contains(r#"\"Quoted\""#));
        assert!(!html.contains(r#"The "Quoted" Episode"#));
    }

    #[test]
    fn test_render_index_title_cannot_close_script_block() {
        let hostile = vec!["Oops</script><script>alert(1)</script>".to_string()];
        let html = render_index(&hostile);

        // The title must not survive as markup that ends the script element.
        assert!(!html.contains("</script><script>alert(1)"));
        assert!(html.contains(r#"Oops\u003c/script>"#));

        // Exactly the template's own closing tags remain.
        assert_eq!(html.matches("</script>").count(), 2);
    }

    #[test]
    fn test_render_index_empty_dataset() {
        let html = render_index(&[]);
        assert!(html.contains("const EPISODE_TITLES = [];"));
    }
}
