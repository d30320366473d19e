//! HTML rendering for the todo pages.
//!
//! # Responsibility
//! - Render the list page from a `TodoPage`.
//! - Render the static about and instructions pages.
//!
//! # Invariants
//! - Every user-supplied value is HTML-escaped before output.
//! - Each listed item carries its id in a `checkbox_id` control posting to
//!   `/delete`.

use todolist_core::{core_version, TodoItem, TodoPage};

const STYLESHEET_PATH: &str = "/css/styles.css";

/// Renders the list page: date header, one row per todo, add form.
pub fn index_page(page: &TodoPage) -> String {
    let mut body = format!(
        "<div class=\"box\" id=\"heading\"><h1>{}</h1></div>\n<div class=\"box\">\n",
        escape_html(&page.today)
    );
    for item in &page.items {
        body.push_str(&todo_row(item));
    }
    body.push_str(
        "<form class=\"item\" action=\"/add\" method=\"post\">\n\
         <input type=\"text\" name=\"todo\" placeholder=\"New Item\" autocomplete=\"off\">\n\
         <button type=\"submit\">+</button>\n\
         </form>\n</div>\n",
    );
    layout("To-Do List", &body)
}

pub fn about_page() -> String {
    let body = format!(
        "<div class=\"box\" id=\"heading\"><h1>About</h1></div>\n\
         <div class=\"box text\">\n\
         <p>A small shared to-do list. Everyone who opens this page sees and edits the same list.</p>\n\
         <p>Items are kept in a local database and survive restarts.</p>\n\
         <p class=\"version\">Version {}</p>\n\
         </div>\n",
        escape_html(core_version())
    );
    layout("About", &body)
}

pub fn instructions_page() -> String {
    let body = "<div class=\"box\" id=\"heading\"><h1>Instructions</h1></div>\n\
                <div class=\"box text\">\n\
                <ol>\n\
                <li>Type a task into the <em>New Item</em> field and press <strong>+</strong> to add it.</li>\n\
                <li>Tick the checkbox next to a task to delete it.</li>\n\
                <li>The date at the top of the list is today's date on the server.</li>\n\
                </ol>\n\
                </div>\n";
    layout("Instructions", body)
}

fn todo_row(item: &TodoItem) -> String {
    let id = escape_html(item.id.as_str());
    format!(
        "<form class=\"item\" action=\"/delete\" method=\"post\">\n\
         <input type=\"checkbox\" name=\"checkbox_id\" value=\"{id}\" onchange=\"this.form.submit()\">\n\
         <p>{}</p>\n\
         </form>\n",
        escape_html(&item.text)
    )
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <link rel=\"stylesheet\" href=\"{STYLESHEET_PATH}\">\n\
         </head>\n\
         <body>\n\
         <nav><a href=\"/\">Home</a> <a href=\"/about\">About</a> <a href=\"/instructions\">Instructions</a></nav>\n\
         {body}\
         </body>\n\
         </html>\n",
        title = escape_html(title)
    )
}

/// Escapes the five HTML-significant characters.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
