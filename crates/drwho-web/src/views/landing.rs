/// Landing page: one free-text question box that navigates to the
/// results page. The input is required, so empty submissions never leave
/// the page; the question travels as the `query` parameter.
use axum::response::Html;

use crate::render;

pub async fn show() -> Html<String> {
    Html(render::page("Dr.WHO", &body()))
}

fn body() -> String {
    "<main class=\"landing\">\n\
     <h1>Dr.WHO</h1>\n\
     <form class=\"search\" action=\"/search-results\" method=\"get\">\n\
     <input type=\"text\" name=\"query\" placeholder=\"병명이나 교수에 대해 질문해주세요\" required>\n\
     <button type=\"submit\">검색</button>\n\
     </form>\n\
     </main>"
        .to_string()
}
