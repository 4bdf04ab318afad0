use axum::response::Html;

/// Shell page for the admin login form; the UI itself is served by the frontend
pub async fn login_page() -> Html<&'static str> {
    Html(
        "<!doctype html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>Admin login</title></head>\n\
         <body><div id=\"admin-login\"></div></body>\n</html>\n",
    )
}

pub async fn dashboard_page() -> Html<&'static str> {
    Html(
        "<!doctype html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>Admin dashboard</title></head>\n\
         <body><div id=\"admin-dashboard\"></div></body>\n</html>\n",
    )
}
