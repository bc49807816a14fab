// Hidden arcade unlock
//
// The sibling arcade game carries one deliberately buried interaction.
// Here it is a named predicate behind a config flag instead of obscured
// control flow.

/// Visual the player must click to trigger the unlock.
pub const UNLOCK_TARGET_VISUAL: &str = "https://i.ibb.co/ymK3nQ5s/Heart6.png";

/// What a clicked arcade tile shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualKind {
    Scammer,
    Safe,
}

/// True when a click should trigger the hidden unlock: the feature flag is
/// on, the player alias contains both "richard" and "heart"
/// (case-insensitive), and the clicked tile is the target visual shown as
/// a safe face.
pub fn hidden_unlock_triggered(
    enabled: bool,
    alias: &str,
    clicked_visual: &str,
    kind: VisualKind,
) -> bool {
    if !enabled {
        return false;
    }
    let alias = alias.to_lowercase();
    alias.contains("richard")
        && alias.contains("heart")
        && clicked_visual == UNLOCK_TARGET_VISUAL
        && kind == VisualKind::Safe
}
