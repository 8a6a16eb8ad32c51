use crate::events::Coordinator;

impl Coordinator {
    pub(crate) fn handle_input_changed(&mut self, text: String) {
        self.state.input_text = text;
        self.re_evaluate();
    }

    pub(crate) fn handle_source_changed(&mut self, code: String) {
        if self.state.source_lang == code {
            return;
        }
        tracing::debug!("source language {} -> {}", self.state.source_lang, code);
        self.state.source_lang = code;

        // A running capture session is bound to the old source language;
        // its transcript or error must not land under the new one.
        if self.capture.is_some() {
            self.abort_capture();
            self.capture_seq += 1;
            self.state.listening = false;
        }

        self.re_evaluate();
    }

    pub(crate) fn handle_target_changed(&mut self, code: String) {
        if self.state.target_lang == code {
            return;
        }
        tracing::debug!("target language {} -> {}", self.state.target_lang, code);
        self.state.target_lang = code;
        self.re_evaluate();
    }
}
