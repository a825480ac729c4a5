use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: Uuid,
    pub text: String,
    pub done: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub completed: usize,
}

/// Read-only view of the store handed to the rendering layer.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub pending_input: String,
    pub tasks: Vec<Task>,
    pub summary: Summary,
}
