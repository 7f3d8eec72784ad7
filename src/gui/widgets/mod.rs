use iced::{
    Color, Element, Length, Point, Rectangle, Renderer, Theme, border, mouse,
    widget::{
        canvas::{self, Frame, Geometry, Path},
        container, row,
    },
};
use iced_widget::container::bordered_box;

use crate::{
    core::{OrphanageId, Region},
    screens::Marker,
};

const MAP_BACKGROUND: Color = Color::from_rgb(0.89, 0.94, 0.96);
const MARKER_COLOR: Color = Color::from_rgb(0.08, 0.76, 0.84);
const SELECTED_COLOR: Color = Color::from_rgb(1.0, 0.84, 0.4);
const MARKER_RADIUS: f32 = 8.0;

struct PlacedMarker {
    x: f64,
    y: f64,
    label: String,
    selected: bool,
}

/// Plain viewport with one dot per marker. Markers outside the region are
/// not drawn.
pub struct MapCanvas {
    markers: Vec<PlacedMarker>,
}

impl MapCanvas {
    pub fn new(region: Region, markers: &[Marker<'_>], selected: Option<OrphanageId>) -> Self {
        let markers = markers
            .iter()
            .filter_map(|marker| {
                let (x, y) = region.project(marker.position)?;
                Some(PlacedMarker {
                    x,
                    y,
                    label: marker.name.to_string(),
                    selected: selected == Some(marker.id),
                })
            })
            .collect();
        Self { markers }
    }

    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        canvas::Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> canvas::Program<Message> for MapCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), MAP_BACKGROUND);

        for marker in &self.markers {
            let center = Point::new(
                marker.x as f32 * bounds.width,
                marker.y as f32 * bounds.height,
            );
            let color = if marker.selected {
                SELECTED_COLOR
            } else {
                MARKER_COLOR
            };
            frame.fill(&Path::circle(center, MARKER_RADIUS), color);
            if marker.selected {
                frame.fill_text(canvas::Text {
                    content: marker.label.clone(),
                    position: Point::new(center.x + MARKER_RADIUS * 1.5, center.y - MARKER_RADIUS),
                    color: Color::BLACK,
                    ..canvas::Text::default()
                });
            }
        }

        vec![frame.into_geometry()]
    }
}

/// Sidebar on the left, main content filling the rest.
pub fn layout<'a, Message>(
    sidebar: impl Into<Element<'a, Message>>,
    main_content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message>
where
    Message: 'a,
{
    container(row![
        container(sidebar.into())
            .style(|theme: &Theme| bordered_box(theme).border(border::width(1)))
            .width(Length::FillPortion(1))
            .height(Length::Fill),
        container(main_content.into()).width(Length::FillPortion(3)),
    ])
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}
