use iced::{
    Alignment, Element, Length,
    widget::{button, column, container, image as iced_image, text},
};

use crate::gui::Message;
use crate::models::{ShapeAnalysis, ShapeCategory, ShapeCounts};

#[derive(Debug, Clone)]
pub struct ResultsScreen {
    handle: iced_image::Handle,
    counts: ShapeCounts,
}

impl ResultsScreen {
    pub fn new(analysis: ShapeAnalysis) -> Self {
        // iced wants RGBA pixels.
        let rgba = image::DynamicImage::ImageRgb8(analysis.annotated).to_rgba8();
        let handle =
            iced_image::Handle::from_rgba(rgba.width(), rgba.height(), rgba.into_raw());
        Self {
            handle,
            counts: analysis.counts,
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut legend = column![text("Shapes detected:").size(16)].spacing(4);
        for category in ShapeCategory::ALL {
            legend = legend.push(text(format!(
                "{}: {}",
                category.label(),
                self.counts.get(category)
            )));
        }

        let content = column![
            iced_image(self.handle.clone())
                .width(Length::Fill)
                .height(Length::Fill),
            container(legend)
                .width(Length::Fill)
                .align_x(Alignment::End)
                .padding(10),
            button("Choose Another Image").on_press(Message::BackToPicker),
        ]
        .spacing(10)
        .padding(10);

        container(content)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }
}
