//! wgpu rendering: device setup, mesh and texture upload, and the three
//! scene pipelines (lit bodies, solid rings, additive star sprites).

pub mod body_pipeline;
pub mod depth;
pub mod gpu;
pub mod mesh;
pub mod ring_pipeline;
pub mod star_pipeline;
pub mod texture;
pub mod uniforms;

pub use body_pipeline::BodyPipeline;
pub use depth::DepthBuffer;
pub use gpu::{FrameError, GpuContext, GpuError, init_gpu_blocking};
pub use mesh::{GpuMesh, StarInstance, Vertex};
pub use ring_pipeline::RingPipeline;
pub use star_pipeline::StarPipeline;
pub use texture::SceneTexture;
pub use uniforms::{FrameUniform, ModelUniform, StarFieldUniform};
