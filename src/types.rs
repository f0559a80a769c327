pub type NodeId = u32;
pub type Weight = f64;

pub const INFINITY: Weight = Weight::INFINITY;

pub type NodeIds = Vec<NodeId>;
pub type Weights = Vec<Weight>;
pub type Arclist = [(NodeId, Weight)];
