use thiserror::Error;

#[derive(Debug, Error)]
pub enum CopyError {
    #[error("source buffer has {actual} floats but the copy requires {needed}")]
    SourceTooSmall { needed: usize, actual: usize },

    #[error("destination buffer has {actual} floats but the copy requires {needed}")]
    DestinationTooSmall { needed: usize, actual: usize },
}

#[derive(Debug, Error)]
pub enum BlendError {
    #[error("position buffer length {len} is not a multiple of 3")]
    PositionsNotVec3Aligned { len: usize },

    #[error("delta buffer length {len} is not a multiple of 3")]
    DeltasNotVec3Aligned { len: usize },

    #[error("index buffer has {actual} entries but the blend uses {needed}")]
    IndexBufferTooSmall { needed: usize, actual: usize },

    #[error("delta buffer has {actual} rows but the blend uses {needed}")]
    DeltaBufferTooSmall { needed: usize, actual: usize },

    #[error("index {index} at entry {slot} is out of range for {vertex_count} vertex rows")]
    IndexOutOfRange {
        slot: usize,
        index: i16,
        vertex_count: usize,
    },
}

#[derive(Debug, Error)]
pub enum GatherError {
    #[error("matrix pool length {len} is not a multiple of 16")]
    PoolNotMatrixAligned { len: usize },

    #[error("index buffer has {actual} entries but the gather uses {needed}")]
    IndexBufferTooSmall { needed: usize, actual: usize },

    #[error("output buffer has {actual} floats but the gather requires {needed}")]
    OutputTooSmall { needed: usize, actual: usize },

    #[error("index {index} at entry {slot} is out of range for a pool of {matrix_count} matrices")]
    IndexOutOfRange {
        slot: usize,
        index: i16,
        matrix_count: usize,
    },
}

#[derive(Debug, Error)]
pub enum MorphError {
    #[error("rest position buffer length {len} is not a multiple of 3")]
    RestPositionsNotVec3Aligned { len: usize },

    #[error("morph target {name:?} has {indices} vertex indices but {displacements} displacements")]
    DisplacementCountMismatch {
        name: String,
        indices: usize,
        displacements: usize,
    },

    #[error("morph target {name:?} references vertex {index} but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        name: String,
        index: i16,
        vertex_count: usize,
    },

    #[error("error copying rest positions")]
    Copy(#[from] CopyError),

    #[error("error accumulating morph target deltas")]
    Blend(#[from] BlendError),
}
