//! Text box widget - editable text with a caret and a scrolling window
//!
//! The text box separates pure state from presentation: [`TextBoxModel`] owns
//! the character buffer, caret, and the inclusive display window into the
//! buffer, and every edit operation keeps three invariants:
//!
//! - `window_left <= window_right`
//! - `window_right - window_left <= width * height - 1`
//! - while editing, the caret stays inside `[window_left, window_right + 1]`
//!
//! The invariants are maintained by the operations themselves; there is no
//! separate clamping pass. [`TextBox`] wraps a model plus the label actor
//! that displays the windowed text.

use crate::foundation::math::{Point2, Vec3};
use crate::scene::{ActorId, Scene};
use crate::ui::label::TextLabel;
use crate::ui::widget::{Widget, WidgetKind};
use crate::ui::UiError;

/// Shown whenever the buffer is empty
const PLACEHOLDER: &str = "Enter Text";

/// Caret marker spliced into the rendered text while editing
const CARET: char = '_';

/// Pure text/caret/window state machine
///
/// `width` is characters per line, `height` is lines; together they bound the
/// number of visible characters at `width * height - 1`, leaving one cell for
/// the caret marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBoxModel {
    chars: Vec<char>,
    width: usize,
    height: usize,
    window_left: usize,
    window_right: usize,
    caret_pos: usize,
    editing: bool,
}

impl TextBoxModel {
    /// Create a model holding `initial` text, not yet in edit mode
    pub fn new(width: usize, height: usize, initial: &str) -> Result<Self, UiError> {
        if width == 0 || height == 0 {
            return Err(UiError::ZeroSizedTextBox { width, height });
        }
        Ok(Self {
            chars: initial.chars().collect(),
            width,
            height,
            window_left: 0,
            window_right: 0,
            caret_pos: 0,
            editing: false,
        })
    }

    /// Maximum number of visible characters
    fn capacity(&self) -> usize {
        self.width * self.height - 1
    }

    /// The full text buffer
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Caret position, in `[0, len]`
    pub fn caret_pos(&self) -> usize {
        self.caret_pos
    }

    /// Inclusive display window `(window_left, window_right)`
    pub fn window(&self) -> (usize, usize) {
        (self.window_left, self.window_right)
    }

    /// Characters per line
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of lines
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the model has entered edit mode
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Enter edit mode; the first entry clears any placeholder text
    pub fn enter_edit_mode(&mut self) {
        if !self.editing {
            self.chars.clear();
            self.caret_pos = 0;
            self.editing = true;
        }
    }

    fn move_caret_right(&mut self) {
        if self.caret_pos < self.chars.len() {
            self.caret_pos += 1;
        }
    }

    fn move_caret_left(&mut self) {
        if self.caret_pos > 0 {
            self.caret_pos -= 1;
        }
    }

    fn right_move_right(&mut self) {
        if self.window_right <= self.chars.len() {
            self.window_right += 1;
        }
    }

    fn right_move_left(&mut self) {
        if self.window_right > 0 {
            self.window_right -= 1;
        }
    }

    fn left_move_right(&mut self) {
        if self.window_left <= self.chars.len() {
            self.window_left += 1;
        }
    }

    fn left_move_left(&mut self) {
        if self.window_left > 0 {
            self.window_left -= 1;
        }
    }

    /// Insert a character token at the caret
    ///
    /// Multi-character tokens are silently ignored unless the token is
    /// "space", which inserts `' '`. When the window is already full it
    /// scrolls right by one so the caret stays visible.
    pub fn insert(&mut self, token: &str) {
        let lowered = token.to_lowercase();
        let ch = if lowered == "space" {
            ' '
        } else {
            let mut it = token.chars();
            match (it.next(), it.next()) {
                (Some(c), None) => c,
                _ => {
                    log::debug!("Ignoring non-insertable token {:?}", token);
                    return;
                }
            }
        };

        self.chars.insert(self.caret_pos, ch);
        self.move_caret_right();
        if self.window_right - self.window_left == self.capacity() {
            self.left_move_right();
        }
        self.right_move_right();
    }

    /// Remove the character before the caret
    ///
    /// No-op at the start of the buffer. Shrinks the window when the buffer
    /// no longer fills it, and scrolls left while the window stays full so
    /// the visible region stays pinned without overscrolling past the start.
    pub fn delete_backward(&mut self) {
        if self.caret_pos == 0 {
            return;
        }
        self.chars.remove(self.caret_pos - 1);
        self.move_caret_left();
        if self.chars.len() < self.capacity() {
            self.right_move_left();
        }
        if self.window_right - self.window_left == self.capacity() && self.window_left > 0 {
            self.left_move_left();
            self.right_move_left();
        }
    }

    /// Move the caret one position left, scrolling a full window with it
    pub fn move_left(&mut self) {
        self.move_caret_left();
        if self.window_left > 0
            && self.caret_pos == self.window_left - 1
            && self.window_right - self.window_left == self.capacity()
        {
            self.left_move_left();
            self.right_move_left();
        }
    }

    /// Move the caret one position right, scrolling a full window with it
    pub fn move_right(&mut self) {
        self.move_caret_right();
        if self.caret_pos == self.window_right + 1
            && self.window_right - self.window_left == self.capacity()
        {
            self.left_move_right();
            self.right_move_right();
        }
    }

    /// The windowed slice of the buffer, optionally with the caret marker
    pub fn showable_text(&self, show_caret: bool) -> String {
        let mut chars = self.chars.clone();
        if show_caret {
            chars.insert(self.caret_pos, CARET);
        }
        let hi = (self.window_right + 1).min(chars.len());
        let lo = self.window_left.min(hi);
        chars[lo..hi].iter().collect()
    }

    /// Re-wrap text by inserting a line break every `width` characters
    fn wrap(&self, text: &str) -> String {
        let mut wrapped = String::new();
        for (i, ch) in text.chars().enumerate() {
            wrapped.push(ch);
            if (i + 1) % self.width == 0 {
                wrapped.push('\n');
            }
        }
        wrapped.trim_end_matches('\n').to_string()
    }

    /// The final multi-line string to display
    ///
    /// An empty buffer renders the fixed placeholder.
    pub fn rendered_text(&self, show_caret: bool) -> String {
        let mut text = self.showable_text(show_caret);
        if text.is_empty() {
            text = PLACEHOLDER.to_string();
        }
        self.wrap(&text)
    }

    /// Interpret one key token, case-insensitively
    ///
    /// "return" commits the edit and returns `true`; "backspace", "left" and
    /// "right" dispatch to the matching operation; anything else is handed to
    /// [`TextBoxModel::insert`]. Returns `false` while editing continues.
    pub fn handle_character(&mut self, key: &str) -> bool {
        let lowered = key.to_lowercase();
        if lowered == "return" {
            return true;
        }
        match lowered.as_str() {
            "backspace" => self.delete_backward(),
            "left" => self.move_left(),
            "right" => self.move_right(),
            _ => self.insert(key),
        }
        false
    }
}

/// Editable text box widget
#[derive(Debug)]
pub struct TextBox {
    label: TextLabel,
    model: TextBoxModel,
}

impl TextBox {
    /// Create a text box of `width` characters by `height` lines showing
    /// `initial` placeholder text at `position`
    pub fn new(
        scene: &mut Scene,
        width: usize,
        height: usize,
        initial: &str,
        position: Point2,
        font_size: f32,
        color: Vec3,
    ) -> Result<Self, UiError> {
        let model = TextBoxModel::new(width, height, initial)?;
        let label = TextLabel::new(scene, initial, position, font_size, color);
        Ok(Self { label, model })
    }

    /// The text actor backing this text box
    pub fn actor(&self) -> ActorId {
        self.label.actor()
    }

    /// The underlying state machine
    pub fn model(&self) -> &TextBoxModel {
        &self.model
    }

    /// The full buffered text
    pub fn text(&self) -> String {
        self.model.text()
    }

    /// Enter edit mode and show the caret
    pub fn edit_mode(&mut self, scene: &mut Scene) {
        self.model.enter_edit_mode();
        self.render(scene, true);
    }

    /// Interpret one key token and refresh the display
    ///
    /// Returns `true` when the edit was committed with "return"; the caret
    /// stops rendering on commit.
    pub fn handle_character(&mut self, scene: &mut Scene, key: &str) -> bool {
        if self.model.handle_character(key) {
            self.render(scene, false);
            return true;
        }
        self.render(scene, true);
        false
    }

    /// Push the windowed, wrapped text to the label
    pub fn render(&self, scene: &mut Scene, show_caret: bool) {
        self.label
            .set_message(scene, &self.model.rendered_text(show_caret));
    }
}

impl Widget for TextBox {
    fn kind(&self) -> WidgetKind {
        WidgetKind::TextBox
    }

    fn collect_actors(&self, out: &mut Vec<ActorId>) {
        out.push(self.label.actor());
    }

    fn set_center(&mut self, scene: &mut Scene, center: Point2) {
        self.label.set_position(scene, center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editing_model(width: usize, height: usize) -> TextBoxModel {
        let mut model = TextBoxModel::new(width, height, PLACEHOLDER).unwrap();
        model.enter_edit_mode();
        model
    }

    fn assert_invariants(model: &TextBoxModel) {
        let (left, right) = model.window();
        assert!(left <= right, "window_left > window_right: {left} > {right}");
        assert!(
            right - left <= model.width() * model.height() - 1,
            "window wider than capacity: {} > {}",
            right - left,
            model.width() * model.height() - 1
        );
        assert!(model.caret_pos() >= left && model.caret_pos() <= right + 1);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            TextBoxModel::new(0, 2, ""),
            Err(UiError::ZeroSizedTextBox { .. })
        ));
        assert!(matches!(
            TextBoxModel::new(5, 0, ""),
            Err(UiError::ZeroSizedTextBox { .. })
        ));
    }

    #[test]
    fn test_first_edit_clears_placeholder() {
        let mut model = TextBoxModel::new(5, 2, PLACEHOLDER).unwrap();
        assert_eq!(model.text(), PLACEHOLDER);

        model.enter_edit_mode();
        assert_eq!(model.text(), "");
        assert_eq!(model.caret_pos(), 0);

        // Re-entering must not clear typed text
        model.insert("a");
        model.enter_edit_mode();
        assert_eq!(model.text(), "a");
    }

    #[test]
    fn test_helloworld_scrolls_window() {
        let mut model = editing_model(5, 2);
        for ch in "HELLOWORLD".chars() {
            model.insert(&ch.to_string());
            assert_invariants(&model);
        }

        let (left, right) = model.window();
        assert_eq!(right - left, 9);
        assert_eq!(model.text(), "HELLOWORLD");
        assert!(model.showable_text(false).ends_with("WORLD"));
    }

    #[test]
    fn test_insert_delete_round_trip() {
        let mut model = editing_model(5, 2);
        for ch in "HELLOWORLD".chars() {
            model.insert(&ch.to_string());
        }
        let snapshot = model.clone();

        model.insert("X");
        model.delete_backward();

        assert_eq!(model, snapshot);
    }

    #[test]
    fn test_delete_scrolls_back_without_overscroll() {
        let mut model = editing_model(5, 2);
        for ch in "HELLOWORLDABC".chars() {
            model.insert(&ch.to_string());
        }
        for _ in 0..13 {
            model.delete_backward();
            assert_invariants(&model);
        }
        assert_eq!(model.text(), "");
        assert_eq!(model.window(), (0, 0));

        // Deleting at the start of the buffer is a no-op
        model.delete_backward();
        assert_eq!(model.window(), (0, 0));
        assert_eq!(model.caret_pos(), 0);
    }

    #[test]
    fn test_caret_movement_scrolls_full_window() {
        let mut model = editing_model(5, 2);
        for ch in "HELLOWORLD".chars() {
            model.insert(&ch.to_string());
        }
        // Window is (1, 10); walk the caret back past the left edge
        for _ in 0..12 {
            model.move_left();
            assert_invariants(&model);
        }
        assert_eq!(model.caret_pos(), 0);
        assert_eq!(model.window().0, 0);

        for _ in 0..12 {
            model.move_right();
            assert_invariants(&model);
        }
        assert_eq!(model.caret_pos(), 10);
    }

    #[test]
    fn test_multi_character_tokens() {
        let mut model = editing_model(5, 2);
        model.insert("shift"); // ignored
        assert_eq!(model.text(), "");

        model.insert("Space");
        assert_eq!(model.text(), " ");

        model.insert("H");
        assert_eq!(model.text(), " H");
    }

    #[test]
    fn test_handle_character_protocol() {
        let mut model = editing_model(5, 2);
        assert!(!model.handle_character("h"));
        assert!(!model.handle_character("i"));
        assert!(!model.handle_character("Backspace"));
        assert_eq!(model.text(), "h");

        assert!(model.handle_character("Return"));
        assert!(model.handle_character("return"));
        assert_eq!(model.text(), "h");
    }

    #[test]
    fn test_rendered_text_wraps_and_marks_caret() {
        let mut model = editing_model(5, 2);
        for ch in "HELLO".chars() {
            model.insert(&ch.to_string());
        }
        // Caret lands after the fifth character, starting the second line
        assert_eq!(model.rendered_text(true), "HELLO\n_");
        assert_eq!(model.rendered_text(false), "HELLO");
    }

    #[test]
    fn test_empty_buffer_renders_placeholder() {
        let model = editing_model(5, 2);
        assert_eq!(model.rendered_text(false), "Enter\n Text");
    }

    #[test]
    fn test_widget_updates_label() {
        let mut scene = Scene::default();
        let mut textbox = TextBox::new(
            &mut scene,
            5,
            2,
            PLACEHOLDER,
            Point2::new(100.0, 10.0),
            18.0,
            Vec3::new(1.0, 1.0, 1.0),
        )
        .unwrap();

        textbox.edit_mode(&mut scene);
        assert!(!textbox.handle_character(&mut scene, "a"));
        assert!(!textbox.handle_character(&mut scene, "b"));

        let label = scene.actor(textbox.actor()).unwrap();
        assert_eq!(label.message(), Some("ab_"));

        assert!(textbox.handle_character(&mut scene, "return"));
        let label = scene.actor(textbox.actor()).unwrap();
        assert_eq!(label.message(), Some("ab"));
    }
}
