//! Personaje del jugador: nivel, emoción y animación de subida de nivel.

pub const LEVEL_UP_SECONDS: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Emotion {
    #[default]
    Neutral,
    Happy,
    Thinking,
    Excited,
    Confused,
    Celebrating,
}

impl Emotion {
    pub fn icon(self) -> &'static str {
        match self {
            Emotion::Neutral => "👤",
            Emotion::Happy => "😊",
            Emotion::Thinking => "🤔",
            Emotion::Excited => "🤩",
            Emotion::Confused => "😕",
            Emotion::Celebrating => "🎉",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AvatarSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl AvatarSize {
    pub fn diameter(self) -> f32 {
        match self {
            AvatarSize::Small => 64.0,
            AvatarSize::Medium => 96.0,
            AvatarSize::Large => 128.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Avatar {
    pub level: u32,
    pub experience: u32,
    pub emotion: Emotion,
    pub size: AvatarSize,
}

/// Animación de subida de nivel, medida con el reloj de la UI.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LevelUpAnimation {
    started_at: Option<f64>,
    finished: bool,
}

impl LevelUpAnimation {
    pub fn trigger(&mut self, now: f64) {
        self.started_at = Some(now);
        self.finished = false;
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.started_at
            .is_some_and(|start| now - start < LEVEL_UP_SECONDS)
    }

    /// Emoción visible: celebra mientras dura y luego se queda contento.
    pub fn emotion(&self, base: Emotion, now: f64) -> Emotion {
        match self.started_at {
            Some(_) if self.is_animating(now) => Emotion::Celebrating,
            Some(_) => Emotion::Happy,
            None => base,
        }
    }

    /// `true` una sola vez, cuando la animación acaba.
    pub fn poll_finished(&mut self, now: f64) -> bool {
        if self.started_at.is_some() && !self.finished && !self.is_animating(now) {
            self.finished = true;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animation_celebrates_then_settles_on_happy() {
        let mut anim = LevelUpAnimation::default();
        assert_eq!(anim.emotion(Emotion::Thinking, 0.0), Emotion::Thinking);

        anim.trigger(10.0);
        assert!(anim.is_animating(10.0));
        assert_eq!(anim.emotion(Emotion::Neutral, 12.9), Emotion::Celebrating);
        assert!(!anim.poll_finished(12.9));

        assert!(!anim.is_animating(13.0));
        assert_eq!(anim.emotion(Emotion::Neutral, 13.0), Emotion::Happy);
        assert!(anim.poll_finished(13.0));
        assert!(!anim.poll_finished(14.0));
    }

    #[test]
    fn sizes_grow() {
        assert!(AvatarSize::Small.diameter() < AvatarSize::Medium.diameter());
        assert!(AvatarSize::Medium.diameter() < AvatarSize::Large.diameter());
    }
}
