use crate::{middlewares::authentication, modules::auth::handle::*};
use actix_web::{
    middleware::from_fn,
    web::{self, scope, ServiceConfig},
};

pub fn public_api_configure(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/auth").service(login).service(logout).service(
            web::resource("/session")
                .wrap(from_fn(authentication))
                .route(web::get().to(session)),
        ),
    );
}
