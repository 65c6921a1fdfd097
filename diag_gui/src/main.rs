//! # Beamdiag GUI Application
//!
//! Diagram viewer built on Iced canvas widgets. Shows one internal-force
//! diagram at a time over its zero baseline; the toolbar switches between
//! normal force, shear force and bending moment, and between the beam cases
//! of a project. The process blocks until the window is closed.
//!
//! ```text
//! diag_gui                 view the built-in two-support example
//! diag_gui <project.bdg>   view every case of a saved project
//! ```

mod ui;

use std::path::Path;
use std::process::ExitCode;

use iced::widget::{canvas::Canvas, column, container};
use iced::{Element, Length, Size, Theme};

use diag_core::calculations::Field;
use diag_core::plot::DiagramPlot;
use diag_core::project::{demo_project, BeamCase, Project};
use diag_core::{load_project, DiagResult};

use ui::{view_toolbar, DiagramCanvas};

#[derive(Debug, Clone)]
pub enum Message {
    SelectField(Field),
    PreviousCase,
    NextCase,
}

/// Every diagram of one beam case, sampled once up front
#[derive(Debug, Clone)]
struct CasePlots {
    label: String,
    plots: Vec<DiagramPlot>,
}

impl CasePlots {
    fn build(case: &BeamCase, project: &Project) -> DiagResult<Self> {
        let ctx = case.context(&project.settings)?;
        let plots = Field::ALL
            .iter()
            .map(|field| DiagramPlot::new(&ctx, *field, &project.settings.styles))
            .collect();
        Ok(CasePlots {
            label: case.label.clone(),
            plots,
        })
    }

    fn plot(&self, field: Field) -> Option<&DiagramPlot> {
        self.plots.iter().find(|p| p.field == field)
    }
}

struct App {
    cases: Vec<CasePlots>,
    current: usize,
    field: Field,
}

impl App {
    fn new(cases: Vec<CasePlots>) -> Self {
        App {
            cases,
            current: 0,
            field: Field::Moment,
        }
    }

    fn update(&mut self, message: Message) {
        let count = self.cases.len().max(1);
        match message {
            Message::SelectField(field) => self.field = field,
            Message::PreviousCase => self.current = (self.current + count - 1) % count,
            Message::NextCase => self.current = (self.current + 1) % count,
        }
        log::debug!("showing {} of case {}", self.field, self.current);
    }

    fn view(&self) -> Element<'_, Message> {
        let Some(case) = self.cases.get(self.current) else {
            return container(iced::widget::text("No beam cases")).padding(20).into();
        };

        let toolbar = view_toolbar(self.field, &case.label, self.current, self.cases.len());
        let mut content = column![toolbar].spacing(8).padding(12);

        if let Some(plot) = case.plot(self.field) {
            content = content.push(
                Canvas::new(DiagramCanvas::new(plot))
                    .width(Length::Fill)
                    .height(Length::Fill),
            );
        }

        content.into()
    }
}

fn build_cases(project: &Project) -> Vec<CasePlots> {
    project
        .cases_by_label()
        .into_iter()
        .filter_map(|(id, case)| match CasePlots::build(case, project) {
            Ok(plots) => Some(plots),
            Err(e) => {
                log::warn!("skipping case {} ({}): {}", case.label, id, e);
                None
            }
        })
        .collect()
}

fn main() -> ExitCode {
    env_logger::init();

    let project = match std::env::args().nth(1) {
        Some(path) => match load_project(Path::new(&path)) {
            Ok(project) => project,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => demo_project(),
    };

    let cases = build_cases(&project);
    if cases.is_empty() {
        eprintln!("Error: project {} has no valid beam cases", project.meta.job_id);
        return ExitCode::FAILURE;
    }
    log::info!("opening viewer with {} case(s)", cases.len());

    let result = iced::application(move || App::new(cases.clone()), App::update, App::view)
        .title("Beamdiag")
        .theme(|_: &App| Theme::Light)
        .window_size(Size::new(960.0, 600.0))
        .run();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
