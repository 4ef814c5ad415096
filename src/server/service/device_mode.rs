//! Device mode store for the front-desk fingerprint device.
//!
//! The device polls for what it should do next: enrol a fingerprint for a member
//! (`register`) or record punches (`attendance`). Staff set the mode through the API.
//! Entries are keyed per device and held in memory with a TTL, so a forgotten
//! `register` request does not linger. Entries are lost on restart.

use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::RwLock;

use crate::server::{error::AppError, model::device::DeviceMode};

/// Key used when the caller does not name a device.
pub const DEFAULT_DEVICE: &str = "default";

/// Longest accepted device key, in characters.
pub const MAX_DEVICE_KEY_LEN: usize = 64;

/// Live entries kept at once. The entry closest to expiry is evicted past this.
pub const MAX_DEVICES: usize = 256;

#[derive(Debug, Clone)]
struct DeviceModeEntry {
    mode: DeviceMode,
    member_id: Option<i32>,
    expires_at: Instant,
}

impl DeviceModeEntry {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Current mode of one device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceModeState {
    pub mode: DeviceMode,
    pub member_id: Option<i32>,
}

/// Shared, TTL-bounded map from device key to its current mode.
///
/// Clones share the same map. Writes to one key replace the previous entry.
#[derive(Clone)]
pub struct DeviceModeService {
    entries: Arc<RwLock<HashMap<String, DeviceModeEntry>>>,
    ttl: Duration,
}

impl DeviceModeService {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Parses the mode sent by a client.
    ///
    /// # Returns
    /// - `Ok(DeviceMode)` - `register` or `attendance`
    /// - `Err(AppError::BadRequest)` - Mode missing or not recognised
    pub fn parse_mode(mode: Option<&str>) -> Result<DeviceMode, AppError> {
        let Some(mode) = mode.filter(|mode| !mode.is_empty()) else {
            return Err(AppError::BadRequest("Mode is required".to_string()));
        };

        mode.parse::<DeviceMode>().map_err(|_| {
            AppError::BadRequest("Invalid mode. Use 'register' or 'attendance'.".to_string())
        })
    }

    /// Sets the mode of a device, restarting its TTL.
    ///
    /// Expired entries of every device are swept on each write. When the store is
    /// full, the entry closest to expiry makes room for a new device.
    ///
    /// # Returns
    /// - `Ok(())` - Mode stored
    /// - `Err(AppError::BadRequest)` - Device key longer than `MAX_DEVICE_KEY_LEN`
    pub async fn set(
        &self,
        device: Option<&str>,
        mode: DeviceMode,
        member_id: Option<i32>,
    ) -> Result<(), AppError> {
        let key = device_key(device);
        if key.chars().count() > MAX_DEVICE_KEY_LEN {
            return Err(AppError::BadRequest(format!(
                "Device key must be at most {} characters",
                MAX_DEVICE_KEY_LEN
            )));
        }

        let entry = DeviceModeEntry {
            mode,
            member_id,
            expires_at: Instant::now() + self.ttl,
        };

        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| !entry.is_expired());

        if entries.len() >= MAX_DEVICES && !entries.contains_key(&key) {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.expires_at)
                .map(|(key, _)| key.clone());
            if let Some(oldest) = oldest {
                tracing::warn!("Device mode store full, evicting device {}", oldest);
                entries.remove(&oldest);
            }
        }

        tracing::debug!("Device {} set to {} (member {:?})", key, mode, member_id);
        entries.insert(key, entry);

        Ok(())
    }

    /// Gets the mode of a device, dropping the entry if its TTL has passed.
    ///
    /// # Returns
    /// - `Some(DeviceModeState)` - Mode set and not expired
    /// - `None` - Nothing set for the device, or it expired
    pub async fn get(&self, device: Option<&str>) -> Option<DeviceModeState> {
        let key = device_key(device);
        let mut entries = self.entries.write().await;

        match entries.get(&key) {
            Some(entry) if entry.is_expired() => {
                entries.remove(&key);
                None
            }
            Some(entry) => Some(DeviceModeState {
                mode: entry.mode,
                member_id: entry.member_id,
            }),
            None => None,
        }
    }
}

fn device_key(device: Option<&str>) -> String {
    device
        .filter(|device| !device.is_empty())
        .unwrap_or(DEFAULT_DEVICE)
        .to_string()
}
