use dioxus::prelude::*;

const DEGREES_PER_PIXEL: f64 = 0.25;
/// An equirectangular image is twice as wide as it is tall; the viewer
/// stretches it to twice the container width.
const PANORAMA_WIDTH_PERCENT: f64 = 200.0;

/// Horizontal viewing angle in degrees, always within `[0, 360)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Yaw(f64);

impl Yaw {
    pub fn degrees(self) -> f64 {
        self.0
    }

    /// Dragging right turns the view left, like grabbing the scene.
    pub fn dragged_by(self, dx_pixels: f64) -> Self {
        if !dx_pixels.is_finite() {
            return self;
        }
        Self((self.0 - dx_pixels * DEGREES_PER_PIXEL).rem_euclid(360.0))
    }

    pub fn background_position_percent(self) -> f64 {
        self.0 / 360.0 * PANORAMA_WIDTH_PERCENT
    }
}

/// Percent-encodes the characters that could close a CSS `url('...')`.
pub fn css_url(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '\'' => out.push_str("%27"),
            '"' => out.push_str("%22"),
            '(' => out.push_str("%28"),
            ')' => out.push_str("%29"),
            '\\' => out.push_str("%5C"),
            ch if ch.is_whitespace() || ch.is_control() => {
                let mut buf = [0u8; 4];
                for byte in ch.encode_utf8(&mut buf).bytes() {
                    out.push_str(&format!("%{byte:02X}"));
                }
            }
            ch => out.push(ch),
        }
    }
    out
}

#[component]
pub fn PanoramaViewer(panorama_url: String) -> Element {
    let mut yaw = use_signal(Yaw::default);
    let mut drag_from = use_signal(|| None::<f64>);
    let image = css_url(&panorama_url);
    let position = format!("{:.3}", yaw().background_position_percent());
    let label = format!("360° panorama, facing {:.0}°", yaw().degrees());
    let cursor = if drag_from().is_some() { "grabbing" } else { "grab" };

    rsx! {
        div {
            class: "panorama-viewer relative w-full h-full select-none touch-none",
            style: "background-image: url('{image}'); background-size: {PANORAMA_WIDTH_PERCENT}% 100%; background-repeat: repeat-x; background-position: {position}% 50%; cursor: {cursor};",
            role: "img",
            aria_label: "{label}",
            onpointerdown: move |evt: PointerEvent| {
                drag_from.set(Some(evt.client_coordinates().x));
            },
            onpointermove: move |evt: PointerEvent| {
                if let Some(start) = drag_from() {
                    let x = evt.client_coordinates().x;
                    yaw.set(yaw().dragged_by(x - start));
                    drag_from.set(Some(x));
                }
            },
            onpointerup: move |_| drag_from.set(None),
            onpointerleave: move |_| drag_from.set(None),
            div { class: "absolute bottom-4 right-4 bg-black/50 backdrop-blur-md px-3 py-1.5 rounded-md text-xs text-white/80 pointer-events-none",
                "Drag to look around"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dragging_wraps_around_the_full_circle() {
        let yaw = Yaw::default().dragged_by(40.0);
        assert_eq!(yaw.degrees(), 350.0);

        let yaw = Yaw::default().dragged_by(-1480.0);
        assert_eq!(yaw.degrees(), 10.0);
    }

    #[test]
    fn non_finite_drag_is_ignored() {
        let yaw = Yaw::default().dragged_by(-100.0);
        assert_eq!(yaw.dragged_by(f64::NAN), yaw);
    }

    #[test]
    fn css_url_cannot_break_out_of_the_declaration() {
        let hostile = "https://x/a'b.jpg'); background-color: red; x: url('y";
        let escaped = css_url(hostile);
        assert!(!escaped.contains('\''));
        assert!(!escaped.contains(')'));
        assert!(!escaped.contains(' '));
        assert_eq!(
            css_url("https://cdn.example/pano (1).jpg"),
            "https://cdn.example/pano%20%281%29.jpg"
        );
        assert_eq!(css_url("https://cdn.example/alma.jpg"), "https://cdn.example/alma.jpg");
    }

    #[test]
    fn viewer_style_keeps_hostile_urls_inside_url() {
        let mut dom = VirtualDom::new_with_props(
            PanoramaViewer,
            PanoramaViewerProps {
                panorama_url: "https://x/a'b.jpg'); background-color: red; x: url('y".to_string(),
            },
        );
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("panorama-viewer"));
        assert!(!html.contains("background-color: red"));
        assert!(html.contains("facing 0°"));
    }

    #[test]
    fn background_offset_tracks_yaw() {
        assert_eq!(Yaw::default().background_position_percent(), 0.0);
        assert_eq!(Yaw(90.0).background_position_percent(), 50.0);
        assert_eq!(Yaw(180.0).background_position_percent(), 100.0);
    }
}
