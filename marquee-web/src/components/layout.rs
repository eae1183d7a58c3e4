//! Layout components - page shell and header

use axum::response::Html;

/// Wraps page content in the base document with HTMX and Tailwind loaded.
pub fn render_page(title: &str, content: &str) -> Html<String> {
    let html = format!(
        r#"<!DOCTYPE html>
        <html lang="en">
        <head>
            <title>{title}</title>
            <meta charset="utf-8">
            <meta name="viewport" content="width=device-width, initial-scale=1">
            <script src="https://cdn.tailwindcss.com"></script>
            <script src="https://unpkg.com/htmx.org@1.9.10"></script>
            <link rel="stylesheet" href="/static/app.css">
            <style>
                .htmx-indicator {{ opacity: 0; transition: opacity 0.3s; }}
                .htmx-request .htmx-indicator {{ opacity: 1; }}
                .htmx-request.htmx-indicator {{ opacity: 1; }}
            </style>
        </head>
        <body class="bg-slate-950 text-white min-h-screen font-sans">
            <main>
                <div class="pattern"></div>
                <div class="wrapper max-w-7xl mx-auto px-4 py-8">
                    {content}
                </div>
            </main>
        </body>
        </html>"#
    );

    Html(html)
}

/// Renders the hero banner, headline and the given search box.
pub fn hero_header(search_box: &str) -> String {
    format!(
        r#"<header class="text-center mb-12">
            <img src="/static/hero.png" alt="Hero Banner" class="mx-auto max-w-lg">
            <h1 class="text-4xl font-bold mt-6">Find <span class="text-gradient">movies</span> you'll enjoy without the hassle</h1>
            {search_box}
        </header>"#
    )
}
