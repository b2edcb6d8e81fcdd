use actix_web::{web, HttpResponse};

use crate::shared::api::ApiResponse;

/// Every routed path. Registered after the real handlers so that a
/// method no handler accepts falls through to a 405.
const KNOWN_PATHS: &[&str] = &[
    "/user/create",
    "/user/token",
    "/user/me",
    "/recipe/tags",
    "/recipe/tags/{id}",
    "/recipe/ingredients",
    "/recipe/ingredients/{id}",
    "/recipe/recipes",
    "/recipe/recipes/{id}",
    "/recipe/recipes/{id}/upload-image",
];

pub async fn method_not_allowed() -> HttpResponse {
    ApiResponse::method_not_allowed()
}

pub fn register_method_fallbacks(cfg: &mut web::ServiceConfig) {
    for path in KNOWN_PATHS {
        cfg.service(web::resource(*path).to(method_not_allowed));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, http::StatusCode, test, App, Responder};

    #[get("/recipe/tags")]
    async fn list_stub() -> impl Responder {
        HttpResponse::Ok().finish()
    }

    #[actix_web::test]
    async fn routed_method_still_reaches_handler() {
        let app = test::init_service(
            App::new()
                .service(list_stub)
                .configure(register_method_fallbacks),
        )
        .await;

        let req = test::TestRequest::get().uri("/recipe/tags").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn unrouted_method_on_known_path_returns_405() {
        let app = test::init_service(
            App::new()
                .service(list_stub)
                .configure(register_method_fallbacks),
        )
        .await;

        let req = test::TestRequest::delete().uri("/recipe/tags").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[actix_web::test]
    async fn unknown_path_stays_404() {
        let app = test::init_service(App::new().configure(register_method_fallbacks)).await;

        let req = test::TestRequest::get().uri("/nope").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
