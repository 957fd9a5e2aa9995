//! Device geolocation and the transient failure notice.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use ppgis_config::GeolocationConfig;
use ppgis_core::geo::Coordinates;
use thiserror::Error;
use tokio::time::Instant;

/// Why a position request failed.
///
/// Codes 1 to 3 follow the W3C `GeolocationPositionError` numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeolocationError {
    #[error("Location permission was denied. Allow location access and try again.")]
    PermissionDenied,

    #[error("Location information is unavailable. Check your GPS or network.")]
    PositionUnavailable,

    #[error("The location request timed out. Please try again.")]
    Timeout,

    #[error("An unknown error occurred while locating you.")]
    Unknown(u16),

    #[error("Geolocation is not supported on this device.")]
    Unsupported,
}

impl GeolocationError {
    /// Map a numeric failure code onto its category.
    #[must_use]
    pub const fn from_code(code: u16) -> Self {
        match code {
            1 => Self::PermissionDenied,
            2 => Self::PositionUnavailable,
            3 => Self::Timeout,
            other => Self::Unknown(other),
        }
    }

    #[must_use]
    pub const fn code(self) -> Option<u16> {
        match self {
            Self::PermissionDenied => Some(1),
            Self::PositionUnavailable => Some(2),
            Self::Timeout => Some(3),
            Self::Unknown(code) => Some(code),
            Self::Unsupported => None,
        }
    }
}

/// Source of the device's current position.
pub trait Locator: Send + Sync {
    fn current_position(
        &self,
        timeout: Duration,
    ) -> impl Future<Output = Result<Coordinates, GeolocationError>> + Send;
}

/// A locator for hosts without positioning support.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unsupported;

impl Locator for Unsupported {
    async fn current_position(&self, _timeout: Duration) -> Result<Coordinates, GeolocationError> {
        Err(GeolocationError::Unsupported)
    }
}

/// A locator that always answers with a fixed outcome.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocator(pub Result<Coordinates, GeolocationError>);

impl Locator for FixedLocator {
    async fn current_position(&self, _timeout: Duration) -> Result<Coordinates, GeolocationError> {
        self.0
    }
}

/// Failure message shown over the map until it expires or is dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationNotice {
    pub error: GeolocationError,
    pub expires_at: Instant,
}

impl LocationNotice {
    #[must_use]
    pub fn message(&self) -> String {
        self.error.to_string()
    }

    #[must_use]
    pub fn is_visible_at(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Result of one [`Geolocator::locate`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocateOutcome {
    Located(Coordinates),
    Failed(GeolocationError),
    /// Another request was still in flight; nothing happened.
    Busy,
}

/// Tracks the in-flight request, the last fix, and the failure notice.
///
/// Methods take `&self` so a handle can be shared with the map panel while a
/// request is pending.
#[derive(Debug)]
pub struct Geolocator {
    config: GeolocationConfig,
    in_flight: AtomicBool,
    last_fix: Mutex<Option<Coordinates>>,
    notice: Mutex<Option<LocationNotice>>,
}

impl Geolocator {
    #[must_use]
    pub const fn new(config: GeolocationConfig) -> Self {
        Self {
            config,
            in_flight: AtomicBool::new(false),
            last_fix: Mutex::new(None),
            notice: Mutex::new(None),
        }
    }

    /// Request the current position from `locator`.
    ///
    /// A request slower than the configured timeout fails with
    /// [`GeolocationError::Timeout`]. A success clears any visible notice; a
    /// failure replaces it.
    pub async fn locate<L: Locator>(&self, locator: &L) -> LocateOutcome {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("locate ignored, request already in flight");
            return LocateOutcome::Busy;
        }
        let in_flight = InFlight(&self.in_flight);

        let timeout = self.config.timeout();
        let result = tokio::time::timeout(timeout, locator.current_position(timeout))
            .await
            .unwrap_or(Err(GeolocationError::Timeout));
        drop(in_flight);

        match result {
            Ok(coords) => {
                tracing::debug!(%coords, "located");
                *lock(&self.last_fix) = Some(coords);
                *lock(&self.notice) = None;
                LocateOutcome::Located(coords)
            }
            Err(error) => {
                tracing::warn!(%error, code = ?error.code(), "geolocation failed");
                *lock(&self.notice) = Some(LocationNotice {
                    error,
                    expires_at: Instant::now() + self.config.notice_duration(),
                });
                LocateOutcome::Failed(error)
            }
        }
    }

    #[must_use]
    pub fn is_locating(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// The most recent successful fix, drawn as the user-location marker.
    #[must_use]
    pub fn last_fix(&self) -> Option<Coordinates> {
        *lock(&self.last_fix)
    }

    /// The failure notice, if one is still within its display window.
    #[must_use]
    pub fn notice(&self) -> Option<LocationNotice> {
        let mut notice = lock(&self.notice);
        if notice
            .as_ref()
            .is_some_and(|n| !n.is_visible_at(Instant::now()))
        {
            *notice = None;
        }
        notice.clone()
    }

    pub fn dismiss_notice(&self) {
        *lock(&self.notice) = None;
    }
}

/// Clears the in-flight flag when dropped, including when the caller
/// abandons a pending [`Geolocator::locate`].
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
