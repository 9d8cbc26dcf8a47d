use iced::{Element, Task, Theme};
use log::error;
use rfd::AsyncFileDialog;

use crate::detection;
use crate::gui::Message;
use crate::gui::screens::{
    ScreenData, picker::PickerScreen, processing::ProcessingScreen, results::ResultsScreen,
};

pub fn run() -> iced::Result {
    iced::application(ShapescopeApp::new, ShapescopeApp::update, ShapescopeApp::view)
        .title(|_state: &ShapescopeApp| "Shapescope - Geometric Shape Detection".to_string())
        .theme(|_state: &ShapescopeApp| Theme::Dark)
        .run()
}

pub struct ShapescopeApp {
    screen: ScreenData,
}

impl ShapescopeApp {
    fn new() -> (Self, Task<Message>) {
        (
            Self {
                screen: ScreenData::Picker(PickerScreen::default()),
            },
            Task::none(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ChooseImage => Task::perform(
                AsyncFileDialog::new()
                    .set_title("Select an image")
                    .add_filter("Image files", &["jpg", "jpeg", "png", "bmp"])
                    .pick_file(),
                |handle| Message::ImagePicked(handle.map(|f| f.path().to_path_buf())),
            ),
            Message::ImagePicked(Some(path)) => {
                self.screen = ScreenData::Processing(ProcessingScreen);
                Task::perform(
                    async move { detection::analyze_file(&path).map_err(|e| e.to_string()) },
                    Message::AnalysisFinished,
                )
            }
            Message::ImagePicked(None) => Task::none(),
            Message::AnalysisFinished(Ok(analysis)) => {
                self.screen = ScreenData::Results(ResultsScreen::new(analysis));
                Task::none()
            }
            Message::AnalysisFinished(Err(err)) => {
                // The shell survives pipeline failures; the picker stays
                // usable for another selection.
                error!("image processing failed: {err}");
                self.screen = ScreenData::Picker(PickerScreen::with_status(format!(
                    "Image processing failed: {err}"
                )));
                Task::none()
            }
            Message::BackToPicker => {
                self.screen = ScreenData::Picker(PickerScreen::default());
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        self.screen.view()
    }
}
