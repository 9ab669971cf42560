use std::io::{self, Stdout, Write};
use std::sync::{Mutex, PoisonError};

use business::domain::navigation::{AppRoute, Navigator};

/// Prints route changes as `→ <route>` lines.
pub struct TerminalNavigator<W: Write + Send = Stdout> {
    out: Mutex<W>,
}

impl TerminalNavigator<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalNavigator<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    fn print(&self, route: &AppRoute) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writeln!(out, "→ {}", route);
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> Navigator for TerminalNavigator<W> {
    fn navigate(&self, route: AppRoute) {
        self.print(&route);
    }

    fn redirect(&self, route: AppRoute) {
        self.print(&route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_print_each_route_change() {
        let navigator = TerminalNavigator::new(Vec::new());

        navigator.navigate(AppRoute::ProductDetail {
            slug: "red-hat".to_string(),
        });
        navigator.redirect(AppRoute::Login);

        let printed = String::from_utf8(navigator.into_inner()).unwrap();
        assert_eq!(printed, "→ /products/red-hat\n→ /login\n");
    }
}
