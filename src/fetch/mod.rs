use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use isahc::config::Configurable;
use isahc::{Request, RequestExt};
use log::{debug, info};

use crate::error::{BakeError, FetchError};

/// источник удалённых данных
pub trait Fetch
{
    /// содержимое ресурса по адресу
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// загрузка по HTTP с кэшированием на диске. кэш не инвалидируется:
/// для обновления данных файл удаляется вручную
pub struct CachedFetcher
{
    cache_dir: PathBuf,
    timeout: Duration,
}

impl CachedFetcher
{
    pub fn new(cache_dir: impl AsRef<Path>, timeout: Duration) -> Self
    {
        Self {
            cache_dir: cache_dir.as_ref().to_path_buf(),
            timeout,
        }
    }

    /// путь к файлу кэша для адреса
    pub fn cache_path(&self, url: &str) -> PathBuf
    {
        self.cache_dir.join(cache_key(url))
    }

    fn download(&self, url: &str) -> Result<Vec<u8>, FetchError>
    {
        let request_error = |message: String| FetchError::Request {
            url: url.to_string(),
            message,
        };

        let mut response = Request::get(url)
            .timeout(self.timeout)
            .body(())
            .map_err(|err| request_error(err.to_string()))?
            .send()
            .map_err(|err| request_error(err.to_string()))?;

        let mut data = vec![];
        response
            .body_mut()
            .read_to_end(&mut data)
            .map_err(|err| FetchError::Body {
                url: url.to_string(),
                err,
            })?;

        let status = response.status();
        if status != isahc::http::StatusCode::OK {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(data)
    }
}

impl Fetch for CachedFetcher
{
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>
    {
        let path = self.cache_path(url);

        if path.is_file() {
            debug!(
                "event=fetch module=fetch status=cached url={} path={}",
                url,
                path.display()
            );

            return std::fs::read(&path).map_err(|err| FetchError::CacheRead { path, err });
        }

        std::fs::create_dir_all(&self.cache_dir).map_err(|err| FetchError::CacheDir {
            path: self.cache_dir.clone(),
            err,
        })?;

        info!("event=fetch module=fetch status=downloading url={}", url);

        let data = self.download(url)?;

        std::fs::write(&path, &data).map_err(|err| FetchError::CacheWrite {
            path: path.clone(),
            err,
        })?;

        info!(
            "event=fetch module=fetch status=ok url={} bytes={}",
            url,
            data.len()
        );

        Ok(data)
    }
}

/// содержимое ресурса как текст
pub fn into_text(data: Vec<u8>, source: &'static str) -> Result<String, BakeError>
{
    String::from_utf8(data).map_err(|_| BakeError::Utf8 { source })
}

/// имя файла кэша - последний сегмент пути адреса
pub fn cache_key(url: &str) -> &str
{
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let path = path.trim_end_matches('/');

    path.rsplit('/').next().unwrap_or(path)
}
