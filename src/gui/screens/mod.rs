pub mod picker;
pub mod processing;
pub mod results;

use iced::Element;

use crate::gui::Message;

#[derive(Debug)]
pub enum ScreenData {
    Picker(picker::PickerScreen),
    Processing(processing::ProcessingScreen),
    Results(results::ResultsScreen),
}

impl ScreenData {
    pub fn view(&self) -> Element<'_, Message> {
        match self {
            ScreenData::Picker(screen) => screen.view(),
            ScreenData::Processing(screen) => screen.view(),
            ScreenData::Results(screen) => screen.view(),
        }
    }
}
