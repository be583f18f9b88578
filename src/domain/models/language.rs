#[cfg(test)]
#[path = "language_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;
use strum::Display;
use strum::EnumIter;
use strum::EnumString;
use strum::EnumVariantNames;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

/// Display strings for a single target language. Pure data, consumed by the
/// renderer and by the agent clients when formatting output.
pub struct Strings {
    pub direction: TextDirection,
    pub app_title: &'static str,
    pub mock_mode: &'static str,
    pub learned_words: &'static str,
    pub no_words_yet: &'static str,
    pub paste_words_title: &'static str,
    pub paste_words_helper: &'static str,
    pub btn_send_words: &'static str,
    pub start_training_title: &'static str,
    pub choose_direction: &'static str,
    pub btn_send: &'static str,
    pub session_complete: &'static str,
    pub what_next: &'static str,
    pub btn_get_feedback: &'static str,
    pub btn_train_again: &'static str,
    pub label_loading: &'static str,
    pub error_network: &'static str,
    pub word_count: &'static str,
    pub lang_name: &'static str,
}

const HEBREW: Strings = Strings {
    direction: TextDirection::Rtl,
    app_title: "מאמן שפות",
    mock_mode: "מצב דמה",
    learned_words: "מילים שנלמדו",
    no_words_yet: "עדיין לא נוספו מילים",
    paste_words_title: "הדבק את המילים שלמדת",
    paste_words_helper: "הפרד מילים עם פסיקים או שורות חדשות",
    btn_send_words: "שלח מילים",
    start_training_title: "התחל אימון",
    choose_direction: "בחר את כיוון האימון:",
    btn_send: "שלח",
    session_complete: "האימון הושלם!",
    what_next: "מה ברצונך לעשות?",
    btn_get_feedback: "קבל משוב",
    btn_train_again: "התאמן שוב",
    label_loading: "טוען...",
    error_network: "שגיאת תקשורת. אנא נסה שנית.",
    word_count: "מילים",
    lang_name: "עברית",
};

const RUSSIAN: Strings = Strings {
    direction: TextDirection::Ltr,
    app_title: "Языковой Тренажер",
    mock_mode: "Тест-режим",
    learned_words: "Изученные слова",
    no_words_yet: "Слова еще не добавлены",
    paste_words_title: "Вставьте изученные слова",
    paste_words_helper: "Разделяйте слова запятыми или новыми строками",
    btn_send_words: "Отправить слова",
    start_training_title: "Начать тренировку",
    choose_direction: "Выберите направление:",
    btn_send: "Отправить",
    session_complete: "Сессия завершена!",
    what_next: "Что делать дальше?",
    btn_get_feedback: "Получить отзыв",
    btn_train_again: "Тренироваться снова",
    label_loading: "Загрузка...",
    error_network: "Ошибка сети. Попробуйте еще раз.",
    word_count: "слов",
    lang_name: "Русский",
};

const UKRAINIAN: Strings = Strings {
    direction: TextDirection::Ltr,
    app_title: "Мовний Тренажер",
    mock_mode: "Тест-режим",
    learned_words: "Вивчені слова",
    no_words_yet: "Слова ще не додані",
    paste_words_title: "Вставте вивчені слова",
    paste_words_helper: "Розділяйте слова комами або новими рядками",
    btn_send_words: "Надіслати слова",
    start_training_title: "Почати тренування",
    choose_direction: "Оберіть напрямок:",
    btn_send: "Надіслати",
    session_complete: "Сесія завершена!",
    what_next: "Що робити далі?",
    btn_get_feedback: "Отримати відгук",
    btn_train_again: "Тренуватися знову",
    label_loading: "Завантаження...",
    error_network: "Помилка мережі. Спробуйте ще раз.",
    word_count: "слів",
    lang_name: "Українська",
};

const SPANISH: Strings = Strings {
    direction: TextDirection::Ltr,
    app_title: "Entrenador de Idiomas",
    mock_mode: "Modo Prueba",
    learned_words: "Palabras aprendidas",
    no_words_yet: "No hay palabras añadidas",
    paste_words_title: "Pega tus palabras aprendidas",
    paste_words_helper: "Separa las palabras con comas o nuevas líneas",
    btn_send_words: "Enviar palabras",
    start_training_title: "Empezar entrenamiento",
    choose_direction: "Elige la dirección:",
    btn_send: "Enviar",
    session_complete: "¡Sesión completada!",
    what_next: "¿Qué te gustaría hacer?",
    btn_get_feedback: "Obtener feedback",
    btn_train_again: "Entrenar de nuevo",
    label_loading: "Cargando...",
    error_network: "Error de red. Inténtalo de nuevo.",
    word_count: "palabras",
    lang_name: "Español",
};

const FRENCH: Strings = Strings {
    direction: TextDirection::Ltr,
    app_title: "Entraîneur de Langue",
    mock_mode: "Mode Test",
    learned_words: "Mots appris",
    no_words_yet: "Aucun mot ajouté",
    paste_words_title: "Collez vos mots appris",
    paste_words_helper: "Séparez les mots par des virgules ou des nouvelles lignes",
    btn_send_words: "Envoyer les mots",
    start_training_title: "Commencer l'entraînement",
    choose_direction: "Choisissez la direction :",
    btn_send: "Envoyer",
    session_complete: "Session terminée !",
    what_next: "Que souhaitez-vous faire ?",
    btn_get_feedback: "Obtenir un retour",
    btn_train_again: "S'entraîner à nouveau",
    label_loading: "Chargement...",
    error_network: "Erreur réseau. Veuillez réessayer.",
    word_count: "mots",
    lang_name: "Français",
};

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    EnumVariantNames,
)]
pub enum Language {
    #[default]
    Hebrew,
    Russian,
    Ukrainian,
    Spanish,
    French,
}

impl Language {
    pub fn strings(&self) -> &'static Strings {
        match self {
            Language::Hebrew => return &HEBREW,
            Language::Russian => return &RUSSIAN,
            Language::Ukrainian => return &UKRAINIAN,
            Language::Spanish => return &SPANISH,
            Language::French => return &FRENCH,
        }
    }

    pub fn direction(&self) -> TextDirection {
        return self.strings().direction;
    }
}
