use crate::remote::AdjustmentStore;
use crate::sync::BoardView;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AdjustmentStore>,
    pub view: Arc<Mutex<BoardView>>,
}

impl AppState {
    pub fn new(store: Arc<dyn AdjustmentStore>) -> Self {
        Self {
            store,
            view: Arc::new(Mutex::new(BoardView::default())),
        }
    }
}
