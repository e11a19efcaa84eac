//! Application state and logic.
//!
//! This module contains the core application state, view management,
//! and event handling logic. The cart and the checkout form are owned
//! here and handed to the view layer by reference; nothing lives in
//! global state.

use chrono::Local;
use ratatui::widgets::ListState;

use crate::cart::Cart;
use crate::checkout::{FormField, PaymentForm, ValidationError};
use crate::event::Action;
use crate::menu::MenuCatalog;

/// The three tabs of the kiosk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Browse the menu and add items
    Menu,
    /// Review what has been added so far
    Cart,
    /// Enter payment details and place the order
    Checkout,
}

impl View {
    /// Tab title as shown in the tabs row.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Menu => "Menu",
            Self::Cart => "Cart",
            Self::Checkout => "Checkout",
        }
    }

    /// All tabs in display order.
    pub fn all() -> [Self; 3] {
        [Self::Menu, Self::Cart, Self::Checkout]
    }

    /// Position in the tabs row.
    pub fn index(&self) -> usize {
        match self {
            Self::Menu => 0,
            Self::Cart => 1,
            Self::Checkout => 2,
        }
    }

    /// The tab to the right, wrapping around.
    pub fn next(&self) -> Self {
        match self {
            Self::Menu => Self::Cart,
            Self::Cart => Self::Checkout,
            Self::Checkout => Self::Menu,
        }
    }

    /// The tab to the left, wrapping around.
    pub fn previous(&self) -> Self {
        match self {
            Self::Menu => Self::Checkout,
            Self::Cart => Self::Menu,
            Self::Checkout => Self::Cart,
        }
    }
}

/// Modal overlay drawn on top of the active view. Dismissed with any
/// key, after which control returns to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    /// A submission was rejected; exactly one failure is reported
    Warning(ValidationError),
    /// The order went through
    OrderConfirmed,
}

/// Status message to display to the user.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// The message text
    pub text: String,
    /// Whether this is an error message
    pub is_error: bool,
}

/// Main application state.
pub struct App {
    /// The fixed menu
    pub catalog: MenuCatalog,
    /// Items picked so far this session
    pub cart: Cart,
    /// Currently active tab
    pub current_view: View,
    /// Selection state for the menu list
    pub menu_state: ListState,
    /// The checkout form as currently typed
    pub form: PaymentForm,
    /// Which form field has focus
    pub focused_field: FormField,
    /// Modal overlay, if one is showing
    pub dialog: Option<Dialog>,
    /// Status message to display
    pub status: Option<StatusMessage>,

    // --- Help visibility ---
    pub show_help: bool,
}

impl App {
    /// Creates a new application instance with the standard menu.
    pub fn new() -> Self {
        let catalog = MenuCatalog::standard();
        let mut menu_state = ListState::default();
        if !catalog.is_empty() {
            menu_state.select(Some(0));
        }
        Self {
            catalog,
            cart: Cart::new(),
            current_view: View::Menu,
            menu_state,
            form: PaymentForm::new(),
            focused_field: FormField::Name,
            dialog: None,
            status: None,
            show_help: false,
        }
    }

    /// True while the checkout fields should capture keystrokes.
    pub fn in_form_mode(&self) -> bool {
        self.current_view == View::Checkout && self.dialog.is_none() && !self.show_help
    }

    /// Handles an action and returns true if the app should quit.
    pub fn handle_event(&mut self, action: Action) -> bool {
        // Handle help toggle from any view
        if action == Action::Help {
            self.show_help = !self.show_help;
            return false;
        }

        // If help is showing, any key closes it
        if self.show_help {
            self.show_help = false;
            return false;
        }

        // A modal dialog swallows everything except quit; any other key
        // dismisses it and returns control to the view underneath.
        if self.dialog.is_some() {
            if action == Action::Quit {
                return true;
            }
            self.dialog = None;
            return false;
        }

        // Handle based on current view
        match self.current_view {
            View::Menu => self.handle_menu_action(action),
            View::Cart => self.handle_cart_action(action),
            View::Checkout => self.handle_checkout_action(action),
        }
    }

    /// Handles actions in the menu view.
    fn handle_menu_action(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::Up => self.select_previous_item(),
            Action::Down => self.select_next_item(),
            Action::Top => self.select_first_item(),
            Action::Bottom => self.select_last_item(),
            Action::Enter => self.add_selected_to_cart(),
            _ => return self.handle_tab_action(action),
        }
        false
    }

    /// Handles actions in the cart view.
    fn handle_cart_action(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            // Jump straight to payment from the cart
            Action::Enter => self.goto(View::Checkout),
            _ => return self.handle_tab_action(action),
        }
        false
    }

    /// Handles actions while the checkout form has focus.
    fn handle_checkout_action(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::Char(c) => self.form.push_char(self.focused_field, c),
            Action::Backspace => self.form.pop_char(self.focused_field),
            Action::NextField => self.focused_field = self.focused_field.next(),
            Action::PrevField => self.focused_field = self.focused_field.previous(),
            Action::Enter => self.submit_order(),
            Action::Back => self.goto(View::Menu),
            Action::NextTab => self.goto(self.current_view.next()),
            Action::PrevTab => self.goto(self.current_view.previous()),
            _ => {}
        }
        false
    }

    /// Tab-switching actions shared by the non-form views.
    fn handle_tab_action(&mut self, action: Action) -> bool {
        match action {
            Action::NextTab => self.goto(self.current_view.next()),
            Action::PrevTab => self.goto(self.current_view.previous()),
            Action::GotoMenu | Action::Back => self.goto(View::Menu),
            Action::GotoCart => self.goto(View::Cart),
            Action::GotoCheckout => self.goto(View::Checkout),
            _ => {}
        }
        false
    }

    /// Switches to the given tab.
    fn goto(&mut self, view: View) {
        self.current_view = view;
        if view == View::Checkout {
            self.focused_field = FormField::Name;
        }
    }

    // --- Menu navigation helpers ---

    fn select_previous_item(&mut self) {
        let len = self.catalog.len();
        if len == 0 {
            return;
        }
        let current = self.menu_state.selected().unwrap_or(0);
        let new = if current == 0 { len - 1 } else { current - 1 };
        self.menu_state.select(Some(new));
    }

    fn select_next_item(&mut self) {
        let len = self.catalog.len();
        if len == 0 {
            return;
        }
        let current = self.menu_state.selected().unwrap_or(0);
        let new = if current >= len - 1 { 0 } else { current + 1 };
        self.menu_state.select(Some(new));
    }

    fn select_first_item(&mut self) {
        if !self.catalog.is_empty() {
            self.menu_state.select(Some(0));
        }
    }

    fn select_last_item(&mut self) {
        let len = self.catalog.len();
        if len > 0 {
            self.menu_state.select(Some(len - 1));
        }
    }

    // --- Cart operations ---

    /// Appends the highlighted menu item to the cart.
    fn add_selected_to_cart(&mut self) {
        if let Some(item) = self.selected_item() {
            let name = item.name.clone();
            let price = item.price;
            self.cart.add(&name, price);
            self.set_status(&format!("Added {name} to cart (${price:.2})"), false);
        }
    }

    // --- Checkout ---

    /// Runs the submit-time validation and opens the matching dialog.
    ///
    /// On failure the form keeps its contents so the customer can fix
    /// the offending field. On success the form is cleared; no order
    /// record is kept anywhere.
    fn submit_order(&mut self) {
        let today = Local::now().date_naive();
        match self.form.validate(today) {
            Ok(()) => {
                self.dialog = Some(Dialog::OrderConfirmed);
                self.form = PaymentForm::new();
                self.focused_field = FormField::Name;
                self.set_status("Order confirmed", false);
            }
            Err(e) => {
                self.dialog = Some(Dialog::Warning(e));
                self.set_status(e.message(), true);
            }
        }
    }

    // --- Status message helpers ---

    fn set_status(&mut self, text: &str, is_error: bool) {
        self.status = Some(StatusMessage {
            text: text.to_string(),
            is_error,
        });
    }

    /// Returns the currently highlighted menu item (if any).
    pub fn selected_item(&self) -> Option<&crate::menu::MenuItem> {
        self.menu_state
            .selected()
            .and_then(|idx| self.catalog.get(idx))
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_starts_on_menu_with_first_item_selected() {
        let app = App::new();
        assert_eq!(app.current_view, View::Menu);
        assert_eq!(app.menu_state.selected(), Some(0));
        assert!(app.cart.is_empty());
    }

    #[test]
    fn test_enter_adds_selected_item() {
        let mut app = App::new();
        assert!(!app.handle_event(Action::Enter));
        assert_eq!(app.cart.len(), 1);
        assert_eq!(app.cart.entries()[0].name, "Classic Vienna Dog");
        assert_eq!(app.cart.total(), Decimal::new(199, 2));
    }

    #[test]
    fn test_adding_twice_yields_two_lines() {
        let mut app = App::new();
        app.handle_event(Action::Enter);
        app.handle_event(Action::Enter);
        assert_eq!(app.cart.len(), 2);
        assert_eq!(app.cart.total(), Decimal::new(398, 2));
    }

    #[test]
    fn test_menu_selection_wraps() {
        let mut app = App::new();
        app.handle_event(Action::Up);
        assert_eq!(app.menu_state.selected(), Some(4));
        app.handle_event(Action::Down);
        assert_eq!(app.menu_state.selected(), Some(0));
        app.handle_event(Action::Bottom);
        assert_eq!(app.menu_state.selected(), Some(4));
        app.handle_event(Action::Top);
        assert_eq!(app.menu_state.selected(), Some(0));
    }

    #[test]
    fn test_tab_cycling() {
        let mut app = App::new();
        app.handle_event(Action::NextTab);
        assert_eq!(app.current_view, View::Cart);
        app.handle_event(Action::NextTab);
        assert_eq!(app.current_view, View::Checkout);
        app.handle_event(Action::NextTab);
        assert_eq!(app.current_view, View::Menu);
        app.handle_event(Action::PrevTab);
        assert_eq!(app.current_view, View::Checkout);
    }

    #[test]
    fn test_goto_tab_shortcuts() {
        let mut app = App::new();
        app.handle_event(Action::GotoCart);
        assert_eq!(app.current_view, View::Cart);
        app.handle_event(Action::GotoCheckout);
        assert_eq!(app.current_view, View::Checkout);
        assert!(app.in_form_mode());
    }

    #[test]
    fn test_typing_fills_focused_field_through_filter() {
        let mut app = App::new();
        app.handle_event(Action::GotoCheckout);
        for c in "Jane 9Doe".chars() {
            app.handle_event(Action::Char(c));
        }
        // The digit never lands in the name field
        assert_eq!(app.form.name, "Jane Doe");

        app.handle_event(Action::NextField);
        assert_eq!(app.focused_field, FormField::CardNumber);
        for c in "1234x".chars() {
            app.handle_event(Action::Char(c));
        }
        assert_eq!(app.form.card_number, "1234");

        app.handle_event(Action::Backspace);
        assert_eq!(app.form.card_number, "123");
    }

    #[test]
    fn test_incomplete_submission_opens_warning() {
        let mut app = App::new();
        app.handle_event(Action::GotoCheckout);
        app.handle_event(Action::Enter);
        assert_eq!(
            app.dialog,
            Some(Dialog::Warning(ValidationError::IncompleteForm))
        );
        // The dialog takes over input until dismissed
        assert!(!app.in_form_mode());
    }

    #[test]
    fn test_warning_dismissed_by_any_key() {
        let mut app = App::new();
        app.handle_event(Action::GotoCheckout);
        app.handle_event(Action::Enter);
        assert!(app.dialog.is_some());
        app.handle_event(Action::Char('x'));
        assert!(app.dialog.is_none());
        // The dismissing key is swallowed, not typed into the field
        assert_eq!(app.form.name, "");
    }

    #[test]
    fn test_successful_order_confirms_and_clears_form() {
        let mut app = App::new();
        app.handle_event(Action::GotoCheckout);
        for c in "Jane Doe".chars() {
            app.handle_event(Action::Char(c));
        }
        app.handle_event(Action::NextField);
        for c in "1234567890123456".chars() {
            app.handle_event(Action::Char(c));
        }
        app.handle_event(Action::NextField);
        for c in "9999-12-31".chars() {
            app.handle_event(Action::Char(c));
        }
        app.handle_event(Action::NextField);
        for c in "123".chars() {
            app.handle_event(Action::Char(c));
        }
        app.handle_event(Action::Enter);
        assert_eq!(app.dialog, Some(Dialog::OrderConfirmed));
        // Payment details are discarded after the order goes through
        assert_eq!(app.form.name, "");
        assert_eq!(app.form.card_number, "");
    }

    #[test]
    fn test_failed_submission_keeps_form_contents() {
        let mut app = App::new();
        app.handle_event(Action::GotoCheckout);
        for c in "Jane".chars() {
            app.handle_event(Action::Char(c));
        }
        app.handle_event(Action::NextField);
        for c in "12".chars() {
            app.handle_event(Action::Char(c));
        }
        app.handle_event(Action::Enter);
        assert_eq!(
            app.dialog,
            Some(Dialog::Warning(ValidationError::IncompleteForm))
        );
        assert_eq!(app.form.name, "Jane");
        assert_eq!(app.form.card_number, "12");
    }

    #[test]
    fn test_help_toggle_and_dismiss() {
        let mut app = App::new();
        app.handle_event(Action::Help);
        assert!(app.show_help);
        app.handle_event(Action::Down);
        assert!(!app.show_help);
        // The dismissing key does not move the selection
        assert_eq!(app.menu_state.selected(), Some(0));
    }

    #[test]
    fn test_quit_from_each_view() {
        for view in [View::Menu, View::Cart] {
            let mut app = App::new();
            app.goto(view);
            assert!(app.handle_event(Action::Quit));
        }
        let mut app = App::new();
        app.handle_event(Action::GotoCheckout);
        assert!(app.handle_event(Action::Quit));
    }

    #[test]
    fn test_quit_works_while_dialog_is_open() {
        let mut app = App::new();
        app.handle_event(Action::GotoCheckout);
        app.handle_event(Action::Enter);
        assert!(app.dialog.is_some());
        assert!(app.handle_event(Action::Quit));
    }

    #[test]
    fn test_esc_leaves_checkout() {
        let mut app = App::new();
        app.handle_event(Action::GotoCheckout);
        app.handle_event(Action::Back);
        assert_eq!(app.current_view, View::Menu);
    }

    #[test]
    fn test_view_order_and_titles() {
        assert_eq!(View::Menu.next(), View::Cart);
        assert_eq!(View::Checkout.next(), View::Menu);
        for view in View::all() {
            assert_eq!(view.next().previous(), view);
        }
        assert_eq!(View::Menu.title(), "Menu");
        assert_eq!(View::Cart.title(), "Cart");
        assert_eq!(View::Checkout.title(), "Checkout");
    }
}
