#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Signup,
    Login,
}

impl AuthMode {
    pub fn opposite(self) -> Self {
        match self {
            AuthMode::Signup => AuthMode::Login,
            AuthMode::Login => AuthMode::Signup,
        }
    }
}

/// What the submit handler should do after the canned alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub alert: &'static str,
    pub next: AuthModal,
}

/// Sign-up / login modal. There is no backend behind it; submitting only
/// walks the user from sign-up to login and then closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthModal {
    pub visible: bool,
    pub mode: AuthMode,
}

impl Default for AuthModal {
    fn default() -> Self {
        Self {
            visible: false,
            mode: AuthMode::Signup,
        }
    }
}

impl AuthModal {
    pub fn open(self) -> Self {
        Self {
            visible: true,
            mode: AuthMode::Signup,
        }
    }

    pub fn close(self) -> Self {
        Self {
            visible: false,
            ..self
        }
    }

    pub fn toggle(self, mode: AuthMode) -> Self {
        Self { mode, ..self }
    }

    pub fn is_signup(&self) -> bool {
        self.mode == AuthMode::Signup
    }

    pub fn submit(self) -> SubmitOutcome {
        match self.mode {
            AuthMode::Signup => SubmitOutcome {
                alert: "Sign up successful! Please log in.",
                next: self.toggle(AuthMode::Login),
            },
            AuthMode::Login => SubmitOutcome {
                alert: "Login successful!",
                next: self.close(),
            },
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            AuthMode::Signup => "Sign Up",
            AuthMode::Login => "Login",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        self.title()
    }

    /// Name, phone and date of birth are only asked for on sign-up.
    pub fn shows_signup_fields(&self) -> bool {
        self.is_signup()
    }

    pub fn footer_prompt(&self) -> &'static str {
        match self.mode {
            AuthMode::Signup => "Already have an account?",
            AuthMode::Login => "Don't have an account?",
        }
    }

    /// Label and target of the link that switches to the other mode.
    pub fn footer_link(&self) -> (&'static str, AuthMode) {
        let target = self.mode.opposite();
        (self.toggle(target).title(), target)
    }
}
