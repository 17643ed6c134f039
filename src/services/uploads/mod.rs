pub mod upload;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::{DriveStorage, SheetStorage};

pub struct UploadService {
    drive: Option<Arc<dyn DriveStorage>>,
    sheets: Option<Arc<dyn SheetStorage>>,
}

impl UploadService {
    pub fn new_lazy() -> Self {
        Self {
            drive: None,
            sheets: None,
        }
    }

    pub(crate) fn get_drive(&self, request: &HttpRequest) -> Arc<dyn DriveStorage> {
        if let Some(drive) = &self.drive {
            drive.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn DriveStorage>>>()
                .expect("Drive storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub(crate) fn get_sheets(&self, request: &HttpRequest) -> Arc<dyn SheetStorage> {
        if let Some(sheets) = &self.sheets {
            sheets.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn SheetStorage>>>()
                .expect("Sheet storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // Handle generic file upload
    pub async fn handle_upload(
        &self,
        request: &HttpRequest,
        payload: Multipart,
    ) -> ActixResult<HttpResponse> {
        upload::handle_upload(self, request, payload).await
    }
}
