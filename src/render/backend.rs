/// Browser graphics backends for the instanced hero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GpuBackend {
    WebGpu,
    WebGl2,
}

impl GpuBackend {
    /// Attempt order, most capable first.
    pub const ORDER: [GpuBackend; 2] = [GpuBackend::WebGpu, GpuBackend::WebGl2];

    pub fn name(self) -> &'static str {
        match self {
            Self::WebGpu => "webgpu",
            Self::WebGl2 => "webgl2",
        }
    }

    /// Creating a surface claims the canvas for one context type, so it must
    /// wait until an adapter exists. WebGL2 is the exception: its adapter is
    /// enumerated from the surface's context and is the last attempt anyway.
    pub fn surface_before_adapter(self) -> bool {
        match self {
            Self::WebGpu => false,
            Self::WebGl2 => true,
        }
    }
}
