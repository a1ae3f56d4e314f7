//! BlueZ adapter, talking to `bluetoothd` over D-Bus through `bluer`.

use std::collections::{BTreeSet, HashSet};
use std::time::Duration;

use async_trait::async_trait;
use bluer::{
    Adapter, AdapterEvent, Address, Device, DiscoveryFilter, DiscoveryTransport, ErrorKind,
    Session, Uuid,
};
use futures::{StreamExt, pin_mut};
use leash_common::device::{DeviceAddress, DiscoveredDevice, ServiceId};
use leash_common::error::RadioError;
use leash_common::radio::{ConnectOutcome, DeviceConnector, DeviceDiscovery, DiscoveryParams};
use tokio::time::timeout;
use tracing::{debug, info};

use crate::RadioSettings;
use crate::admission::{self, Sighting};

/// How long setting up a discovery session may take before the stack is considered hung.
const SETUP_TIMEOUT: Duration = Duration::from_secs(5);

pub struct BluezRadio {
    _session: Session,
    adapter: Adapter,
    settings: RadioSettings,
}

impl BluezRadio {
    /// Opens the default adapter. It must exist and be powered on.
    pub async fn open(settings: RadioSettings) -> Result<Self, RadioError> {
        let session = Session::new().await.map_err(unavailable)?;
        let adapter = session.default_adapter().await.map_err(unavailable)?;

        if !adapter.is_powered().await.map_err(unavailable)? {
            return Err(RadioError::Unavailable(format!(
                "{} is powered off",
                adapter.name()
            )));
        }

        info!("Using bluetooth adapter {}", adapter.name());
        Ok(Self {
            _session: session,
            adapter,
            settings,
        })
    }

    /// Inspects one device and converts it if the sweep parameters admit it.
    async fn inspect(
        &self,
        address: Address,
        params: &DiscoveryParams,
    ) -> Result<Option<DiscoveredDevice>, bluer::Error> {
        let device: Device = self.adapter.device(address)?;
        let sighting = Sighting {
            paired: device.is_paired().await?,
            connected: device.is_connected().await?,
            heard: device.rssi().await?.is_some(),
        };

        if !admission::admits(params, &sighting) {
            return Ok(None);
        }

        let Ok(device_address) = DeviceAddress::new(address.to_string()) else {
            return Ok(None);
        };

        let services: BTreeSet<Uuid> = device
            .uuids()
            .await?
            .unwrap_or_default()
            .into_iter()
            .collect();

        Ok(Some(DiscoveredDevice {
            address: device_address,
            name: device.name().await?,
            connected: sighting.connected,
            services: services
                .iter()
                .map(|uuid| ServiceId::new(uuid.to_string()))
                .collect(),
        }))
    }
}

#[async_trait]
impl DeviceDiscovery for BluezRadio {
    async fn discover(
        &self,
        params: &DiscoveryParams,
    ) -> Result<Vec<DiscoveredDevice>, RadioError> {
        let setup = async {
            let mut filter = DiscoveryFilter::default();
            filter.transport = if params.le_only {
                DiscoveryTransport::Le
            } else {
                DiscoveryTransport::Auto
            };
            filter.duplicate_data = false;
            self.adapter.set_discovery_filter(filter).await?;

            // Dropping the stream ends the discovery session.
            Ok::<_, bluer::Error>(self.adapter.discover_devices_with_changes().await?)
        };

        let events = match timeout(SETUP_TIMEOUT, setup).await {
            Ok(events) => events.map_err(|e| RadioError::Discovery(e.to_string()))?,
            Err(_elapsed) => return Err(RadioError::Timeout(SETUP_TIMEOUT)),
        };
        pin_mut!(events);

        let sweep_deadline = tokio::time::sleep(self.settings.sweep);
        tokio::pin!(sweep_deadline);

        let mut admitted: HashSet<Address> = HashSet::new();
        let mut found: Vec<DiscoveredDevice> = Vec::new();

        while found.len() < params.max_devices {
            tokio::select! {
                event = events.next() => match event {
                    Some(AdapterEvent::DeviceAdded(address)) => {
                        if admitted.contains(&address) {
                            continue;
                        }
                        match self.inspect(address, params).await {
                            Ok(Some(device)) => {
                                debug!("Found {address} (connected: {})", device.connected);
                                admitted.insert(address);
                                found.push(device);
                            }
                            Ok(None) => {}
                            Err(e) => debug!("Skipping {address}: {e}"),
                        }
                    }
                    Some(_) => {}
                    None => break,
                },

                _ = &mut sweep_deadline => {
                    break;
                }
            }
        }

        debug!("Sweep finished with {} device(s)", found.len());
        Ok(found)
    }
}

#[async_trait]
impl DeviceConnector for BluezRadio {
    async fn connect(&self, address: &DeviceAddress, service: &ServiceId) -> ConnectOutcome {
        let bt_address: Address = match address.as_str().parse() {
            Ok(a) => a,
            Err(e) => return ConnectOutcome::Other(format!("invalid address {address}: {e}")),
        };
        let uuid: Uuid = match service.as_str().parse() {
            Ok(u) => u,
            Err(e) => return ConnectOutcome::Other(format!("invalid service {service}: {e}")),
        };
        let device: Device = match self.adapter.device(bt_address) {
            Ok(d) => d,
            Err(e) => return ConnectOutcome::Other(e.to_string()),
        };

        let probe_timeout: Duration = self.settings.probe_timeout;
        let attempt = match timeout(probe_timeout, device.connect_profile(&uuid)).await {
            Ok(Ok(())) => Attempt::opened(),
            Ok(Err(e)) => Attempt::failed(&e.kind, e.to_string()),
            Err(_elapsed) => Attempt::timed_out(probe_timeout),
        };

        if attempt.release {
            release(&device, &uuid).await;
        }
        attempt.outcome
    }
}

/// How a connection attempt ended, and whether it may have left a link of ours open.
#[derive(Debug, PartialEq, Eq)]
struct Attempt {
    outcome: ConnectOutcome,
    release: bool,
}

impl Attempt {
    fn opened() -> Self {
        Self {
            outcome: ConnectOutcome::Connected,
            release: true,
        }
    }

    /// `bluetoothd` keeps connecting after the call is dropped.
    fn timed_out(after: Duration) -> Self {
        Self {
            outcome: ConnectOutcome::Transport(format!("no answer within {after:?}")),
            release: true,
        }
    }

    fn failed(kind: &ErrorKind, message: String) -> Self {
        match kind {
            // Someone else's link; leave it alone.
            ErrorKind::AlreadyConnected => Self {
                outcome: ConnectOutcome::Connected,
                release: false,
            },
            ErrorKind::ConnectionAttemptFailed
            | ErrorKind::Failed
            | ErrorKind::NotReady
            | ErrorKind::InProgress
            | ErrorKind::NotAvailable
            | ErrorKind::AuthenticationTimeout => Self {
                outcome: ConnectOutcome::Transport(message),
                release: true,
            },
            _ => Self {
                outcome: ConnectOutcome::Other(message),
                release: false,
            },
        }
    }
}

async fn release(device: &Device, uuid: &Uuid) {
    if let Err(e) = device.disconnect_profile(uuid).await {
        debug!("Failed to release {uuid} on {}: {e}", device.address());
    }
}

fn unavailable(e: bluer::Error) -> RadioError {
    RadioError::Unavailable(e.to_string())
}
