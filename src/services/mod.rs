pub mod attendance;
pub mod uploads;

pub use attendance::AttendanceService;
pub use uploads::UploadService;

#[cfg(test)]
pub(crate) mod testing {
    //! 测试替身：带调用计数的远端存储，用于验证边界层
    //! 校验失败时远端零调用，以及批量路径的 fail-soft 行为。

    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::errors::{AttendanceError, Result};
    use crate::models::uploads::entities::DriveFile;
    use crate::storage::{DriveStorage, SheetStorage};

    #[derive(Default)]
    pub struct MockDrive {
        pub uploads: AtomicUsize,
        // 第 n 次调用时注入失败（从 1 计）
        pub fail_on_call: Option<usize>,
        pub uploaded_names: Mutex<Vec<String>>,
        pub folder_ids: Mutex<Vec<Option<String>>>,
    }

    impl MockDrive {
        pub fn failing_on(call: usize) -> Self {
            Self {
                fail_on_call: Some(call),
                ..Self::default()
            }
        }

        pub fn upload_count(&self) -> usize {
            self.uploads.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl DriveStorage for MockDrive {
        async fn upload_file(
            &self,
            payload: &[u8],
            name: &str,
            folder_id: Option<&str>,
        ) -> Result<DriveFile> {
            assert!(!payload.is_empty(), "pipeline must not upload empty payloads");
            let call = self.uploads.fetch_add(1, Ordering::SeqCst) + 1;
            self.uploaded_names.lock().unwrap().push(name.to_string());
            self.folder_ids
                .lock()
                .unwrap()
                .push(folder_id.map(|s| s.to_string()));

            if self.fail_on_call == Some(call) {
                return Err(AttendanceError::remote_store("injected upload failure"));
            }
            Ok(DriveFile {
                id: format!("drive-{call}"),
                name: name.to_string(),
                view_link: format!("https://drive.example/view/{call}"),
                download_link: format!("https://drive.example/dl/{call}"),
            })
        }
    }

    #[derive(Default)]
    pub struct MockSheets {
        pub ensure_calls: AtomicUsize,
        // 已存在的分表标题
        pub existing: Mutex<Vec<String>>,
        pub created: Mutex<Vec<String>>,
        pub headers: Mutex<Vec<(String, Vec<String>)>>,
        pub appended: Mutex<Vec<(String, Vec<Vec<String>>)>>,
    }

    impl MockSheets {
        pub fn ensure_count(&self) -> usize {
            self.ensure_calls.load(Ordering::SeqCst)
        }

        pub fn created_titles(&self) -> Vec<String> {
            self.created.lock().unwrap().clone()
        }

        pub fn appended_ranges(&self) -> Vec<String> {
            self.appended
                .lock()
                .unwrap()
                .iter()
                .map(|(range, _)| range.clone())
                .collect()
        }
    }

    #[async_trait::async_trait]
    impl SheetStorage for MockSheets {
        async fn ensure_sheet(&self, _spreadsheet_id: &str, sheet_title: &str) -> Result<bool> {
            self.ensure_calls.fetch_add(1, Ordering::SeqCst);
            let mut existing = self.existing.lock().unwrap();
            if existing.iter().any(|title| title == sheet_title) {
                return Ok(false);
            }
            existing.push(sheet_title.to_string());
            self.created.lock().unwrap().push(sheet_title.to_string());
            Ok(true)
        }

        async fn append_rows(
            &self,
            _spreadsheet_id: &str,
            range: &str,
            rows: Vec<Vec<String>>,
        ) -> Result<()> {
            self.appended.lock().unwrap().push((range.to_string(), rows));
            Ok(())
        }

        async fn write_header(
            &self,
            _spreadsheet_id: &str,
            sheet_title: &str,
            headers: Vec<String>,
        ) -> Result<()> {
            self.headers
                .lock()
                .unwrap()
                .push((sheet_title.to_string(), headers));
            Ok(())
        }
    }

    /// 手工拼 multipart/form-data 请求体，供路由集成测试使用
    pub fn multipart_body(
        boundary: &str,
        parts: &[(&str, Option<&str>, &[u8])],
    ) -> Vec<u8> {
        let mut body = Vec::new();
        for (name, filename, data) in parts {
            body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
            match filename {
                Some(filename) => {
                    body.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
                        )
                        .as_bytes(),
                    );
                }
                None => {
                    body.extend_from_slice(
                        format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n")
                            .as_bytes(),
                    );
                }
            }
            body.extend_from_slice(data);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
        body
    }

    /// 一段带合法 JPEG 魔术字节的最小照片负载
    pub fn jpeg_payload() -> Vec<u8> {
        let mut data = vec![0xFF, 0xD8, 0xFF, 0xE0];
        data.extend_from_slice(&[0x00; 16]);
        data
    }
}
