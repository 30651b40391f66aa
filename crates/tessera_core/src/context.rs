use std::sync::Arc;

use thiserror::Error;

/// The wgpu objects the viewer needs once a window exists.
///
/// The renderer keeps `device` and `queue` behind `Arc` so the patch buffer
/// and the passes can hold them independently of the context.
pub struct EngineContext {
    pub instance: wgpu::Instance,
    pub adapter: wgpu::Adapter,
    pub device: Arc<wgpu::Device>,
    pub queue: Arc<wgpu::Queue>,
}

#[derive(Debug, Error)]
pub enum ContextError {
    #[error("no graphics adapter can present to this window")]
    NoCompatibleAdapter,
    #[error("adapter {adapter} refused a device: {source}")]
    DeviceRequest {
        adapter: String,
        #[source]
        source: wgpu::RequestDeviceError,
    },
}

impl EngineContext {
    /// Picks an adapter that can present to `surface` and opens a device on
    /// it.  Line-strip drawing needs no optional features, so downlevel
    /// limits are enough and older adapters still qualify.
    pub async fn for_surface(
        instance: wgpu::Instance,
        surface: &wgpu::Surface<'_>,
    ) -> Result<Self, ContextError> {
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(ContextError::NoCompatibleAdapter)?;

        let info = adapter.get_info();
        log::info!("using adapter {} ({:?})", info.name, info.backend);

        let limits = wgpu::Limits::downlevel_defaults().using_resolution(adapter.limits());
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Tessera Device"),
                    required_limits: limits,
                    ..Default::default()
                },
                None,
            )
            .await
            .map_err(|source| ContextError::DeviceRequest {
                adapter: info.name.clone(),
                source,
            })?;

        Ok(Self {
            instance,
            adapter,
            device: Arc::new(device),
            queue: Arc::new(queue),
        })
    }

    /// Preferred color format for `surface`: the first sRGB format the
    /// adapter reports, else whatever it lists first.
    pub fn surface_format(&self, surface: &wgpu::Surface<'_>) -> Option<wgpu::TextureFormat> {
        let caps = surface.get_capabilities(&self.adapter);
        pick_format(&caps.formats)
    }
}

fn pick_format(formats: &[wgpu::TextureFormat]) -> Option<wgpu::TextureFormat> {
    formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .or_else(|| formats.first().copied())
}
