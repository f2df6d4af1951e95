//! CardAnimated — обёртка над Thaw Card с анимацией появления.
//!
//! Анимация определена в `layout.css` (`@keyframes card-appear`).
//! Каскадная задержка даёт stagger-эффект в сетке каталога.

use leptos::prelude::*;
use thaw::Card;

/// Шаг каскадной задержки между соседними карточками, мс
pub const STAGGER_STEP_MS: u32 = 40;
/// Верхняя граница задержки, чтобы длинный каталог не "проявлялся" долго
pub const STAGGER_MAX_MS: u32 = 400;

/// Задержка анимации для карточки с позицией `index`
pub fn stagger_delay(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(STAGGER_STEP_MS)
        .min(STAGGER_MAX_MS)
}

/// Inline-стиль анимации с дополнительными стилями в конце
pub fn animation_style(delay_ms: u32, style: &str) -> String {
    let base = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);
    if style.is_empty() {
        base
    } else {
        format!("{} {}", base, style)
    }
}

/// Обёртка над Thaw [`Card`] с анимацией `card-appear`.
#[component]
pub fn CardAnimated(
    /// Задержка анимации в миллисекундах.
    #[prop(optional)]
    delay_ms: u32,
    /// Дополнительные inline-стили.
    #[prop(optional, into)]
    style: String,
    /// Дополнительный CSS-класс карточки.
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <Card class=class attr:style=animation_style(delay_ms, &style)>
            {children()}
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(3), 120);
        assert_eq!(stagger_delay(10), STAGGER_MAX_MS);
        assert_eq!(stagger_delay(usize::MAX), STAGGER_MAX_MS);
    }

    #[test]
    fn test_animation_style() {
        assert_eq!(
            animation_style(80, ""),
            "animation: card-appear 0.28s ease-out 80ms both;"
        );
        assert_eq!(
            animation_style(0, "cursor: pointer;"),
            "animation: card-appear 0.28s ease-out 0ms both; cursor: pointer;"
        );
    }
}
