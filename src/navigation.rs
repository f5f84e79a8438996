use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Profile,
    CreateAppointment { provider_id: String },
    /// `date` is the booked time in epoch milliseconds.
    AppointmentCreated { date: i64 },
}

/// What a screen asks the navigator to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Push(Route),
    Back,
    Reset(Route),
}

#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            stack: vec![Route::Dashboard],
        }
    }
}

impl Navigator {
    pub fn current(&self) -> &Route {
        // The stack is never empty: back stops at the root and reset pushes.
        &self.stack[self.stack.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn navigate(&mut self, route: Route) {
        debug!(?route, "Navigate");
        self.stack.push(route);
    }

    pub fn go_back(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
        debug!(route = ?self.current(), "Back");
    }

    pub fn reset(&mut self, route: Route) {
        debug!(?route, "Reset");
        self.stack.clear();
        self.stack.push(route);
    }

    pub fn apply(&mut self, navigation: Navigation) {
        match navigation {
            Navigation::Push(route) => self.navigate(route),
            Navigation::Back => self.go_back(),
            Navigation::Reset(route) => self.reset(route),
        }
    }
}
