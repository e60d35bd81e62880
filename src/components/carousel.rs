use crate::components::Icon;
use dioxus::prelude::*;

/// Current slide of a non-looping carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselPosition {
    index: usize,
    len: usize,
}

impl CarouselPosition {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn can_prev(self) -> bool {
        self.index > 0
    }

    pub fn can_next(self) -> bool {
        self.index + 1 < self.len
    }

    pub fn prev(self) -> Self {
        Self {
            index: self.index.saturating_sub(1),
            ..self
        }
    }

    pub fn next(self) -> Self {
        if self.can_next() {
            Self {
                index: self.index + 1,
                ..self
            }
        } else {
            self
        }
    }

    pub fn go_to(self, index: usize) -> Self {
        Self {
            index: index.min(self.len.saturating_sub(1)),
            ..self
        }
    }
}

#[component]
pub fn ImageCarousel(images: Vec<String>, title: String) -> Element {
    let count = images.len();
    let mut position = use_signal(move || CarouselPosition::new(count));
    let current = position();
    let offset = current.index() * 100;

    rsx! {
        div { class: "carousel relative w-full overflow-hidden rounded-lg",
            div {
                class: "flex transition-transform duration-500 ease-out",
                style: "transform: translateX(-{offset}%);",
                for (index , image) in images.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "carousel-item min-w-full h-[400px] md:h-[500px]",
                        div { class: "h-full w-full relative rounded-lg overflow-hidden",
                            img {
                                class: "w-full h-full object-cover",
                                src: "{image}",
                                alt: format!("{title} - Image {}", index + 1),
                            }
                        }
                    }
                }
            }
            button {
                class: "absolute left-2 top-1/2 -translate-y-1/2 w-9 h-9 rounded-full bg-black/50 hover:bg-black/70 border border-white/10 text-white flex items-center justify-center disabled:opacity-40",
                aria_label: "Previous image",
                disabled: !current.can_prev(),
                onclick: move |_| position.with_mut(|p| *p = p.prev()),
                Icon { name: "chevron-left".to_string(), class: "w-4 h-4".to_string() }
            }
            button {
                class: "absolute right-2 top-1/2 -translate-y-1/2 w-9 h-9 rounded-full bg-black/50 hover:bg-black/70 border border-white/10 text-white flex items-center justify-center disabled:opacity-40",
                aria_label: "Next image",
                disabled: !current.can_next(),
                onclick: move |_| position.with_mut(|p| *p = p.next()),
                Icon { name: "chevron-right".to_string(), class: "w-4 h-4".to_string() }
            }
            div { class: "absolute bottom-4 right-4 flex gap-1.5",
                for index in 0..count {
                    button {
                        key: "{index}",
                        class: if index == current.index() { "w-2 h-2 rounded-full bg-white" } else { "w-2 h-2 rounded-full bg-white/40 hover:bg-white/70" },
                        aria_label: format!("Go to image {}", index + 1),
                        onclick: move |_| position.with_mut(|p| *p = p.go_to(index)),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_first_slide_with_only_next_enabled() {
        let position = CarouselPosition::new(3);
        assert_eq!(position.index(), 0);
        assert!(!position.can_prev());
        assert!(position.can_next());
    }

    #[test]
    fn does_not_wrap_past_either_end() {
        let last = CarouselPosition::new(3).next().next().next();
        assert_eq!(last.index(), 2);
        assert!(!last.can_next());

        let first = last.prev().prev().prev();
        assert_eq!(first.index(), 0);
    }

    #[test]
    fn go_to_clamps_to_last_slide() {
        assert_eq!(CarouselPosition::new(4).go_to(2).index(), 2);
        assert_eq!(CarouselPosition::new(4).go_to(10).index(), 3);
        assert_eq!(CarouselPosition::new(0).go_to(1).index(), 0);
    }
}
