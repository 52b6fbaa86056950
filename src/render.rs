//! Index page renderer.
//!
//! Produces the complete HTML document for one directory listing. The
//! renderer is pure: it never touches the filesystem, and the output is
//! fully determined by the path string and the link mapping.
//!
//! The document bytes are a compatibility surface for already-deployed
//! trees, so the heading path and the link labels and targets are
//! interpolated verbatim: no HTML escaping, no URL encoding.

use crate::links::LinkMap;

/// Fixed chrome above the directory heading: Bootstrap CDN stylesheet,
/// local stylesheet, empty title, and the three-item site navigation bar.
const PAGE_PROLOGUE: &str = r#"
<!DOCTYPE html>

<html lang="en">

<head>
	<!-- Required meta tags -->
	<meta charset="utf-8">
	<meta name="viewport" content="width=device-width, initial-scale=1">

	<!-- Bootstrap CSS -->
	<link href="https://cdn.jsdelivr.net/npm/bootstrap@5.0.0-beta3/dist/css/bootstrap.min.css" rel="stylesheet"
		integrity="sha384-eOJMYsd53ii+scO/bJGFsiCZc+5NDVN2yr8+0RDqr0Ql0h+rP48ckxlpbzKgwra6" crossorigin="anonymous">
	<link rel="stylesheet" href="css/style.css">

	<!-- Title -->
	<title></title>
</head>

<body>
	<div class="container">

		<div class="navtop">
			<header class="d-flex justify-content-center py-3">
				<ul class="nav nav-pills">
					<li class="nav-item"><a href="/index.html" class="nav-link">Home</a></li>
					<li class="nav-item"><a href="/research.html" class="nav-link">Research</a></li>
					<li class="nav-item"><a href="/teaching.html" class="nav-link active">Teaching</a></li>
				</ul>
			</header>
	</div>

    <div class="container">
"#;

const PAGE_EPILOGUE: &str = "\n</ul>\n</div>\n</div>\n</body>\n</html>\n";

/// Render the index document for one directory.
///
/// Entries are sorted by display label, case-insensitively; each one
/// becomes a list item holding a single anchor. `path` only appears as the
/// heading text, it does not influence the links.
pub fn render_index_html(path: &str, links: &LinkMap) -> String {
    let mut html = String::with_capacity(2 * 1024);
    html.push_str(PAGE_PROLOGUE);
    html.push_str(&format!(
        "    <h1>Content of the directory {path}</h1>\n<ul>\n"
    ));
    for (label, target) in links.sorted_by_label() {
        html.push_str(&format!(
            r#"        <li>
        <a href="{target}">{label}</a>
        </li>
        "#
        ));
    }
    html.push_str(PAGE_EPILOGUE);
    html
}
