mod questionnaire;

pub use questionnaire::QuestionnaireView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
