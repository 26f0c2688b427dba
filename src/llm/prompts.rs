/// System message sent ahead of every prompt.
pub const SYSTEM_INSTRUCTION: &str = "You are a helpful assistant";

/// Built-in template for meeting minutes, used until a custom prompt is set.
pub const DEFAULT_MINUTES_TEMPLATE: &str = "يرجى تقديم ملخص موجز ومهني لمحضر الاجتماع التالي بدون اي marking down, اكتب العنوان في الاول ثم التلخيص ثم اسم الشخص و التاريخ";

/// Fixed template for agendas. Not affected by custom prompts.
pub const AGENDA_TEMPLATE: &str = "Please provide a concise, formal summary of the following meeting agenda. \
Write the summary in the same language as the agenda, without any markdown formatting. \
Start with the title, then list the agenda items in order with a short description of each.";

/// Compose the prompt for a minutes summary.
pub fn build_minutes_prompt(
    template: &str,
    title: &str,
    creator_name: &str,
    date: &str,
    minutes: &str,
) -> String {
    format!(
        "{template}\n\n\
Title: {title}\n\
Creator: {creator_name}\n\
Date: {date}\n\n\
Minutes:\n\
{minutes}"
    )
}

/// Compose the prompt for an agenda summary.
pub fn build_agenda_prompt(title: &str, agenda: &str) -> String {
    format!(
        "{AGENDA_TEMPLATE}\n\n\
Title: {title}\n\
Agenda:\n\
{agenda}"
    )
}
