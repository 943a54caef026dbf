/// Events emitted while a maze session progresses that renderers can handle
#[derive(Debug, Clone)]
pub enum RenderEvent {
    /// A fresh maze was generated
    Started,

    /// A batch of cells was revealed
    Revealed,

    /// A cell was activated and joined a group
    Activated,

    /// Entry and exit now share a group
    Connected,

    /// The shortest path has been computed
    PathTraced,

    /// The session is over
    Completed,
}
