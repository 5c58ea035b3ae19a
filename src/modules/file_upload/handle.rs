use actix_multipart::Multipart;
use actix_web::{
    http::header::{ContentDisposition, DispositionParam, DispositionType},
    web, HttpResponse,
};
use futures_util::TryStreamExt;
use uuid::Uuid;

use crate::api::{error, success};
use crate::modules::file_upload::{schema::BlobResponse, service::FileUploadService};

/// Every part that carries a file name becomes one blob; other parts are ignored.
pub async fn upload_files(
    mut payload: Multipart,
    service: web::Data<FileUploadService>,
) -> Result<success::Success<Vec<BlobResponse>>, error::Error> {
    let mut uploaded = Vec::new();

    while let Some(mut field) =
        payload.try_next().await.map_err(|e| error::Error::bad_request(e.to_string()))?
    {
        let Some(filename) =
            field.content_disposition().and_then(|cd| cd.get_filename()).map(|f| f.to_string())
        else {
            continue;
        };
        let declared = field.content_type().map(|m| m.essence_str().to_string());

        let mut bytes = web::BytesMut::new();
        while let Some(chunk) =
            field.try_next().await.map_err(|e| error::Error::bad_request(e.to_string()))?
        {
            if bytes.len() + chunk.len() > service.max_file_size() {
                return Err(error::Error::bad_request(format!(
                    "File size exceeds maximum allowed size of {} bytes",
                    service.max_file_size()
                )));
            }
            bytes.extend_from_slice(&chunk);
        }

        uploaded.push(service.store_file(filename, bytes.freeze(), declared.as_deref())?);
    }

    if uploaded.is_empty() {
        return Err(error::Error::bad_request("No file found in request"));
    }

    Ok(success::Success::created(Some(uploaded)).message("Files attached successfully"))
}

pub async fn get_file(
    blob_id: web::Path<Uuid>,
    service: web::Data<FileUploadService>,
) -> Result<HttpResponse, error::Error> {
    let blob = service.get_blob(&blob_id.into_inner())?;

    Ok(HttpResponse::Ok()
        .content_type(blob.mime_type.as_str())
        .insert_header(ContentDisposition {
            disposition: DispositionType::Inline,
            parameters: vec![DispositionParam::Filename(blob.filename.clone())],
        })
        .body(blob.bytes))
}
