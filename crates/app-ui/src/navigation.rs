//! Navigation system for StayFinder
//!
//! This module provides a type-safe navigation framework with:
//! - Route definitions
//! - Tab navigation
//! - Navigation stack management per tab
//! - Gate-driven selection of the mounted screen tree

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use app_state::{GatePhase, SessionSnapshot};

// =============================================================================
// Route Definitions
// =============================================================================

/// All possible routes in the application
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "route", content = "params")]
pub enum Route {
    // Auth group
    /// Sign-in screen
    SignIn,
    /// Sign-up screen
    SignUp,

    // Main group
    /// Home feed of rooms
    Home,
    /// Room detail reached from the home feed
    Room {
        /// Room id
        id: String,
    },
    /// Nearby-rooms map
    AroundMe,
    /// Room detail reached from the map
    RoomMap {
        /// Room id
        id: String,
    },
    /// Profile editor
    Profile,
}

impl Default for Route {
    fn default() -> Self {
        Route::Home
    }
}

impl Route {
    /// Get the URL path for this route
    pub fn to_path(&self) -> String {
        match self {
            Route::SignIn => "/sign-in".to_string(),
            Route::SignUp => "/sign-up".to_string(),
            Route::Home => "/".to_string(),
            Route::Room { id } => format!("/rooms/{}", urlencoding::encode(id)),
            Route::AroundMe => "/around".to_string(),
            Route::RoomMap { id } => format!("/around/rooms/{}", urlencoding::encode(id)),
            Route::Profile => "/profile".to_string(),
        }
    }

    /// Check if this route requires authentication
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::SignIn | Route::SignUp)
    }

    /// Get a display title for this route
    pub fn title(&self) -> &'static str {
        match self {
            Route::SignIn => "Sign In",
            Route::SignUp => "Sign Up",
            Route::Home => "Home",
            Route::Room { .. } => "Room profile",
            Route::AroundMe => "Around me",
            Route::RoomMap { .. } => "Room",
            Route::Profile => "My Profile",
        }
    }
}

// =============================================================================
// Navigation Tabs
// =============================================================================

/// Main navigation tabs of the authenticated group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NavigationTab {
    /// Home feed tab
    #[default]
    Home,
    /// Nearby-rooms map tab
    Around,
    /// Profile tab
    Profile,
}

impl NavigationTab {
    /// Get the root route for this tab
    pub fn root_route(&self) -> Route {
        match self {
            NavigationTab::Home => Route::Home,
            NavigationTab::Around => Route::AroundMe,
            NavigationTab::Profile => Route::Profile,
        }
    }

    /// Get icon name for this tab
    pub fn icon(&self) -> &'static str {
        match self {
            NavigationTab::Home => "home",
            NavigationTab::Around => "location",
            NavigationTab::Profile => "user",
        }
    }

    /// Get label for this tab
    pub fn label(&self) -> &'static str {
        match self {
            NavigationTab::Home => "Home",
            NavigationTab::Around => "Around me",
            NavigationTab::Profile => "My Profile",
        }
    }

    /// Get all tabs in order
    pub fn all() -> [NavigationTab; 3] {
        [
            NavigationTab::Home,
            NavigationTab::Around,
            NavigationTab::Profile,
        ]
    }
}

// =============================================================================
// Navigation Stack
// =============================================================================

/// A navigation stack entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The route
    pub route: Route,
    /// Unique key for this entry
    pub key: String,
}

impl StackEntry {
    /// Create a new stack entry
    pub fn new(route: Route) -> Self {
        Self {
            route,
            key: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// Navigation stack for a screen group or tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationStack {
    /// Stack entries (bottom to top)
    entries: Vec<StackEntry>,
    /// Root route for this stack
    root: Route,
}

impl NavigationStack {
    /// Create a new navigation stack with a root route
    pub fn new(root: Route) -> Self {
        Self {
            entries: vec![StackEntry::new(root.clone())],
            root,
        }
    }

    /// Push a route onto the stack
    pub fn push(&mut self, route: Route) {
        self.entries.push(StackEntry::new(route));
    }

    /// Pop the top route (returns true if popped, false if at root)
    pub fn pop(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    /// Pop to root
    pub fn pop_to_root(&mut self) {
        self.entries.truncate(1);
    }

    /// Replace the top route
    pub fn replace(&mut self, route: Route) {
        if let Some(last) = self.entries.last_mut() {
            *last = StackEntry::new(route);
        }
    }

    /// Get the current (top) route
    pub fn current(&self) -> &Route {
        &self.entries.last().expect("Stack should never be empty").route
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    /// Get stack depth
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Get all entries
    pub fn entries(&self) -> &[StackEntry] {
        &self.entries
    }

    /// Reset to a new root
    pub fn reset(&mut self, route: Route) {
        self.root = route.clone();
        self.entries = vec![StackEntry::new(route)];
    }
}

// =============================================================================
// Screen Tree
// =============================================================================

/// The authenticated screen group: three tabs, each with its own stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainTree {
    /// Current active tab
    pub active_tab: NavigationTab,
    /// Stacks for each tab
    pub tab_stacks: HashMap<NavigationTab, NavigationStack>,
}

impl Default for MainTree {
    fn default() -> Self {
        let mut tab_stacks = HashMap::new();
        for tab in NavigationTab::all() {
            tab_stacks.insert(tab, NavigationStack::new(tab.root_route()));
        }

        Self {
            active_tab: NavigationTab::Home,
            tab_stacks,
        }
    }
}

impl MainTree {
    /// Get the current stack for the active tab
    pub fn current_stack(&self) -> &NavigationStack {
        self.tab_stacks
            .get(&self.active_tab)
            .expect("All tabs should have stacks")
    }

    /// Get mutable current stack
    pub fn current_stack_mut(&mut self) -> &mut NavigationStack {
        self.tab_stacks
            .get_mut(&self.active_tab)
            .expect("All tabs should have stacks")
    }

    /// Switch to a tab (keeps each tab's own stack intact)
    pub fn switch_tab(&mut self, tab: NavigationTab) {
        self.active_tab = tab;
    }
}

/// The mounted screen tree, selected by the navigation gate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScreenTree {
    /// Bootstrap has not completed; nothing is mounted yet
    Placeholder,
    /// Unauthenticated group: sign-in / sign-up stack only
    Auth(NavigationStack),
    /// Authenticated group: tabbed screens with per-tab stacks
    Main(MainTree),
}

impl ScreenTree {
    /// Build the tree mounted for a gate phase
    ///
    /// Each transition rebuilds the group from its roots, so a fresh
    /// sign-in never inherits stale drill-down state and a logout drops
    /// every authenticated screen.
    pub fn for_phase(phase: GatePhase) -> Self {
        match phase {
            GatePhase::Bootstrapping => ScreenTree::Placeholder,
            GatePhase::Unauthenticated => ScreenTree::Auth(NavigationStack::new(Route::SignIn)),
            GatePhase::Authenticated => ScreenTree::Main(MainTree::default()),
        }
    }

    /// Get the currently visible route, if any screen is mounted
    pub fn current_route(&self) -> Option<&Route> {
        match self {
            ScreenTree::Placeholder => None,
            ScreenTree::Auth(stack) => Some(stack.current()),
            ScreenTree::Main(tree) => Some(tree.current_stack().current()),
        }
    }

    /// Check if a route is reachable from this tree
    pub fn can_reach(&self, route: &Route) -> bool {
        match self {
            ScreenTree::Placeholder => false,
            ScreenTree::Auth(_) => !route.requires_auth(),
            ScreenTree::Main(_) => route.requires_auth(),
        }
    }
}

// =============================================================================
// App Navigator
// =============================================================================

/// Owner of the mounted screen tree
///
/// Applies gate phases and exposes the navigation actions screens use.
/// Navigation to a route the mounted group cannot reach is ignored; the
/// gate, not the screens, decides which group exists.
#[derive(Debug, Clone, PartialEq)]
pub struct AppNavigator {
    tree: ScreenTree,
    phase: GatePhase,
}

impl Default for AppNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl AppNavigator {
    /// Create a navigator in the bootstrapping phase
    pub fn new() -> Self {
        Self {
            tree: ScreenTree::Placeholder,
            phase: GatePhase::Bootstrapping,
        }
    }

    /// Get the mounted screen tree
    pub fn tree(&self) -> &ScreenTree {
        &self.tree
    }

    /// Get the current gate phase
    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    /// Apply a gate phase, rebuilding the tree on transition
    ///
    /// Applying the current phase again is a no-op so in-group
    /// navigation state survives unrelated session snapshots.
    pub fn apply_phase(&mut self, phase: GatePhase) {
        if self.phase != phase {
            self.phase = phase;
            self.tree = ScreenTree::for_phase(phase);
        }
    }

    /// Derive and apply the phase for a session snapshot
    pub fn sync(&mut self, snapshot: &SessionSnapshot) {
        self.apply_phase(GatePhase::from_snapshot(snapshot));
    }

    /// Get the currently visible route, if any
    pub fn current_route(&self) -> Option<&Route> {
        self.tree.current_route()
    }

    /// Navigate to a route within the mounted group
    ///
    /// Returns true if the route was reachable and pushed.
    pub fn navigate(&mut self, route: Route) -> bool {
        if !self.tree.can_reach(&route) {
            return false;
        }

        match &mut self.tree {
            ScreenTree::Placeholder => false,
            ScreenTree::Auth(stack) => {
                stack.push(route);
                true
            }
            ScreenTree::Main(tree) => {
                tree.current_stack_mut().push(route);
                true
            }
        }
    }

    /// Go back within the mounted group
    ///
    /// Returns true if a screen was popped.
    pub fn go_back(&mut self) -> bool {
        match &mut self.tree {
            ScreenTree::Placeholder => false,
            ScreenTree::Auth(stack) => stack.pop(),
            ScreenTree::Main(tree) => tree.current_stack_mut().pop(),
        }
    }

    /// Switch the active tab (authenticated group only)
    ///
    /// Returns true if the main tree is mounted.
    pub fn switch_tab(&mut self, tab: NavigationTab) -> bool {
        match &mut self.tree {
            ScreenTree::Main(tree) => {
                tree.switch_tab(tab);
                true
            }
            _ => false,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
