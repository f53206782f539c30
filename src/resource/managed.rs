//! Resources the `gracefuld` host opens from its configuration.

use crate::config::ResourceConfig;
use crate::resource::{CloseResult, Closeable};
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::net::{SocketAddr, TcpListener};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A file holding the process id, removed on close.
#[derive(Debug)]
pub struct PidFile {
    path: PathBuf,
}

impl PidFile {
    /// Write the current process id to `path`, replacing any previous file.
    pub fn create(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        fs::write(&path, format!("{}\n", std::process::id()))?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Closeable for PidFile {
    fn close(&mut self) -> CloseResult {
        fs::remove_file(&self.path).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("failed to remove pid file {}: {}", self.path.display(), e),
            )
        })?;
        Ok(())
    }
}

/// An append-mode file handle, flushed and synced on close.
#[derive(Debug)]
pub struct FileResource {
    path: PathBuf,
    file: Option<File>,
}

impl FileResource {
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            file: Some(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The open handle, or `None` once closed.
    pub fn file(&mut self) -> Option<&mut File> {
        self.file.as_mut()
    }
}

impl Closeable for FileResource {
    fn close(&mut self) -> CloseResult {
        match self.file.take() {
            Some(mut file) => file.close(),
            None => Ok(()),
        }
    }
}

/// A bound TCP listener, released on close.
#[derive(Debug)]
pub struct TcpListenerResource {
    address: SocketAddr,
    listener: Option<TcpListener>,
}

impl TcpListenerResource {
    pub fn bind(address: SocketAddr) -> io::Result<Self> {
        let listener = TcpListener::bind(address)?;
        let address = listener.local_addr()?;
        Ok(Self {
            address,
            listener: Some(listener),
        })
    }

    /// The bound address (with the real port if `:0` was requested).
    pub fn local_addr(&self) -> SocketAddr {
        self.address
    }

    pub fn is_open(&self) -> bool {
        self.listener.is_some()
    }
}

impl Closeable for TcpListenerResource {
    fn close(&mut self) -> CloseResult {
        drop(self.listener.take());
        Ok(())
    }
}

/// Any resource the host can open from configuration.
#[derive(Debug)]
pub enum ManagedResource {
    PidFile(PidFile),
    File(FileResource),
    TcpListener(TcpListenerResource),
}

impl ManagedResource {
    /// Open the resource described by `config`.
    pub fn open(config: &ResourceConfig) -> io::Result<Self> {
        let resource = match config {
            ResourceConfig::PidFile { path } => ManagedResource::PidFile(PidFile::create(path)?),
            ResourceConfig::File { path } => ManagedResource::File(FileResource::open(path)?),
            ResourceConfig::TcpListener { address } => {
                ManagedResource::TcpListener(TcpListenerResource::bind(*address)?)
            }
        };
        debug!(resource = %resource, "opened resource");
        Ok(resource)
    }
}

impl Closeable for ManagedResource {
    fn close(&mut self) -> CloseResult {
        match self {
            ManagedResource::PidFile(r) => r.close(),
            ManagedResource::File(r) => r.close(),
            ManagedResource::TcpListener(r) => r.close(),
        }
    }
}

impl fmt::Display for ManagedResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManagedResource::PidFile(r) => write!(f, "pid_file {}", r.path().display()),
            ManagedResource::File(r) => write!(f, "file {}", r.path().display()),
            ManagedResource::TcpListener(r) => write!(f, "tcp_listener {}", r.local_addr()),
        }
    }
}

/// Open every configured resource, in order.
///
/// Stops at the first failure; resources opened so far are dropped.
pub fn open_resources(configs: &[ResourceConfig]) -> io::Result<Vec<ManagedResource>> {
    configs.iter().map(ManagedResource::open).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_pid_file_lifecycle() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.pid");

        let mut pid_file = PidFile::create(&path).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.trim(), std::process::id().to_string());

        pid_file.close().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_pid_file_already_removed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.pid");

        let mut pid_file = PidFile::create(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let err = pid_file.close().unwrap_err();
        assert!(err.to_string().contains("failed to remove pid file"));
    }

    #[test]
    fn test_file_resource_close() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("journal.log");

        let mut resource = FileResource::open(&path).unwrap();
        resource.file().unwrap().write_all(b"entry\n").unwrap();

        resource.close().unwrap();
        assert!(resource.file().is_none());
        assert_eq!(fs::read_to_string(&path).unwrap(), "entry\n");

        // Closing again is a no-op.
        assert!(resource.close().is_ok());
    }

    #[test]
    fn test_tcp_listener_released() {
        let mut resource = TcpListenerResource::bind("127.0.0.1:0".parse().unwrap()).unwrap();
        let address = resource.local_addr();
        assert_ne!(address.port(), 0);
        assert!(resource.is_open());

        resource.close().unwrap();
        assert!(!resource.is_open());

        // The port can be bound again once released.
        TcpListener::bind(address).unwrap();
    }

    #[test]
    fn test_open_resources_in_order() {
        let dir = TempDir::new().unwrap();
        let configs = vec![
            ResourceConfig::PidFile {
                path: dir.path().join("app.pid"),
            },
            ResourceConfig::File {
                path: dir.path().join("journal.log"),
            },
            ResourceConfig::TcpListener {
                address: "127.0.0.1:0".parse().unwrap(),
            },
        ];

        let resources = open_resources(&configs).unwrap();
        assert_eq!(resources.len(), 3);
        assert!(matches!(resources[0], ManagedResource::PidFile(_)));
        assert!(matches!(resources[1], ManagedResource::File(_)));
        assert!(matches!(resources[2], ManagedResource::TcpListener(_)));
        assert!(resources[1].to_string().starts_with("file "));
    }

    #[test]
    fn test_open_resources_fails_fast() {
        let configs = vec![ResourceConfig::File {
            path: PathBuf::from("/nonexistent/dir/journal.log"),
        }];
        assert!(open_resources(&configs).is_err());
    }
}
