use actix_web::web;

use crate::modules::file_upload::handle::{get_file, upload_files};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/files")
            .service(web::resource("").route(web::post().to(upload_files)))
            .service(web::resource("/{blob_id}").route(web::get().to(get_file))),
    );
}
