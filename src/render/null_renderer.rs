use std::cell::Cell;
use std::rc::Rc;

use crate::error::{ChartError, ChartResult};
use crate::render::{ChartHandle, TimelineChartOptions, TimelineRenderer};

/// No-op backend used by tests and headless runtime usage.
///
/// It records what it was asked to build and can be armed to fail the next
/// construction, which is the only fault the lifecycle is expected to
/// surface.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub charts_created: usize,
    pub last_point_count: usize,
    fail_message: Option<String>,
    disposals: Rc<Cell<usize>>,
}

impl NullRenderer {
    /// Arms the renderer so the next `create_chart` fails with `message`.
    pub fn fail_next_with(&mut self, message: impl Into<String>) {
        self.fail_message = Some(message.into());
    }

    /// Number of chart handles disposed so far, across all handles this
    /// renderer created.
    #[must_use]
    pub fn disposal_count(&self) -> usize {
        self.disposals.get()
    }
}

impl TimelineRenderer for NullRenderer {
    type Chart = NullChart;

    fn create_chart(&mut self, options: &TimelineChartOptions) -> ChartResult<Self::Chart> {
        if let Some(message) = self.fail_message.take() {
            return Err(ChartError::RenderFailed(message));
        }

        self.charts_created += 1;
        self.last_point_count = options.point_count();
        Ok(NullChart {
            live: true,
            disposals: Rc::clone(&self.disposals),
        })
    }
}

/// Handle produced by [`NullRenderer`]; counts its own disposal exactly
/// once no matter how often `dispose` is called.
#[derive(Debug)]
pub struct NullChart {
    live: bool,
    disposals: Rc<Cell<usize>>,
}

impl ChartHandle for NullChart {
    fn dispose(&mut self) {
        if self.live {
            self.live = false;
            self.disposals.set(self.disposals.get() + 1);
        }
    }
}
